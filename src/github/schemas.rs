use serde::{Deserialize, Serialize};

/// GitHubのレスポンス型定義

/// コンテンツAPIが返すエントリ
///
/// `GET /repos/{owner}/{repo}/contents/{path}`
#[derive(Clone, Debug, Deserialize)]
pub struct ContentEntry {
    /// アイテムタイプ（"file"や"dir"など）
    #[serde(rename = "type")]
    pub item_type: String,
    /// ファイル名
    pub name: String,
    /// リポジトリルートからのパス
    pub path: String,
    /// ブラウザ向けURL
    pub html_url: Option<String>,
    /// このエントリ自身のAPI URL
    pub url: Option<String>,
    /// ファイルコンテンツ（通常はBase64エンコードされている）
    pub content: Option<String>,
    /// エンコーディング（"base64"など）
    pub encoding: Option<String>,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.item_type == "dir"
    }
}

/// コンテンツAPIの応答
///
/// ディレクトリならエントリの配列、ファイルなら単一のエントリ。
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Listing(Vec<ContentEntry>),
    Single(ContentEntry),
}

/// URLとデコード済み内容を保持したツリーノード
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CombinedNode {
    Dir {
        name: String,
        /// 取得に失敗した子は `None` のまま残る
        content: Vec<Option<CombinedNode>>,
        url: String,
        api_url: String,
    },
    File {
        name: String,
        path: String,
        content: Option<String>,
        url: Option<String>,
        /// 親ディレクトリの一覧取得に使ったURL
        api_url: String,
    },
}

impl CombinedNode {
    pub fn name(&self) -> &str {
        match self {
            CombinedNode::Dir { name, .. } | CombinedNode::File { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, CombinedNode::Dir { .. })
    }
}

/// 名前と種類だけのツリーノード
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CleanNode {
    Dir {
        name: String,
        contents: Option<Vec<CleanNode>>,
    },
    File {
        name: String,
    },
}
