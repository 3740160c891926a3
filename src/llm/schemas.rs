// Azure OpenAI API 応答に関するスキーマ

use serde::{Deserialize, Serialize};

/// Azure OpenAIのエンドポイント設定
#[derive(Clone, Debug)]
pub struct Endpoint {
    /// エンドポイント名（ログ用）
    pub name: String,
    /// APIキー
    pub key: String,
    /// エンドポイントURL
    pub endpoint: String,
}

/// チャットメッセージ
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatMessage {
    /// メッセージの役割（"system", "user", "assistant"など）
    pub role: String,
    /// メッセージの内容
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAIのトークン使用量
#[derive(Clone, Debug, Deserialize)]
pub struct OpenAIUsage {
    pub total_tokens: usize,
}

/// OpenAIのチャット選択肢
#[derive(Clone, Debug, Deserialize)]
pub struct OpenAIChoice {
    pub message: ChatMessage,
}

/// OpenAIのチャット完了レスポンス
#[derive(Clone, Debug, Deserialize)]
pub struct OpenAIResponse {
    pub id: String,
    /// 選択肢の配列（通常は1つ）
    pub choices: Vec<OpenAIChoice>,
    pub usage: Option<OpenAIUsage>,
}
