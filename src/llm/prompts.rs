// プロンプトテンプレートを管理するモジュール

/// テンプレート変数のタイプ
pub type TemplateVariables = Vec<(String, String)>;

/// プロンプトに埋め込むコードの最大文字数
pub const MAX_CODE_CHARS: usize = 10_000;

/// コード質問用のシステムプロンプト
pub const CODE_QUESTION_TEMPLATE: &str = r#"You are a senior software engineer helping a developer understand a file from a GitHub repository.

File: {{path}}

```
{{code}}
```

Answer the user's question using only the file above. Quote the relevant lines when they support your answer. If the file does not contain enough information, say so."#;

/// テンプレート内の `{{key}}` を置換
pub fn render_template(template: &str, variables: &TemplateVariables) -> String {
    let mut rendered = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        rendered = rendered.replace(&placeholder, value);
    }

    rendered
}

/// 大きなファイルは先頭部分のみ
pub fn truncate_code(code: &str) -> String {
    match code.char_indices().nth(MAX_CODE_CHARS) {
        Some((cut, _)) => format!("{}...\n(truncated)...", &code[..cut]),
        None => code.to_string(),
    }
}

/// コードURLと本文からシステムプロンプトを組み立てる
pub fn code_question_prompt(code_url: &str, code: &str) -> String {
    render_template(
        CODE_QUESTION_TEMPLATE,
        &vec![
            ("path".to_string(), code_url.to_string()),
            ("code".to_string(), truncate_code(code)),
        ],
    )
}
