// Azure OpenAI クライアント

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use futures::FutureExt;
use futures::future::BoxFuture;
use log::{error, info};
use serde_json::json;

use super::CodeAssistant;
use super::prompts::code_question_prompt;
use super::schemas::{ChatMessage, Endpoint, OpenAIResponse};
use crate::github::GitHubClient;

pub const DEFAULT_API_VERSION: &str = "2023-05-15";

pub struct AzureOpenAIClient {
    client: reqwest::Client,
    endpoint: Endpoint,
    api_version: String,
}

impl AzureOpenAIClient {
    pub fn new(endpoint: Endpoint, api_version: impl Into<String>) -> Self {
        AzureOpenAIClient {
            client: reqwest::Client::new(),
            endpoint,
            api_version: api_version.into(),
        }
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint.name
    }

    /// 最初の選択肢の本文を返す
    pub async fn chat_completion(
        &self,
        messages: &[ChatMessage],
        deployment: &str,
        max_tokens: usize,
        temperature: f32,
    ) -> Result<String> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.endpoint.trim_end_matches('/'),
            deployment,
            self.api_version
        );

        let request_body = json!({
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.endpoint.key)
            .json(&request_body)
            .send()
            .await
            .with_context(|| format!("OpenAI API リクエスト失敗: {}", self.endpoint.name))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!(
                "OpenAI API エラー: ステータス {}, レスポンス: {}",
                status,
                error_text
            ));
        }

        let openai_response: OpenAIResponse = response.json().await?;
        if let Some(usage) = &openai_response.usage {
            info!(
                "[{}] 応答受信: {} (トークン数: {})",
                self.endpoint.name, openai_response.id, usage.total_tokens
            );
        }

        openai_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("OpenAI API の応答に選択肢がありません"))
    }
}

/// コードURLの中身を読んでAzure OpenAIに質問する
pub struct AzureCodeAssistant {
    github: Arc<GitHubClient>,
    openai: AzureOpenAIClient,
    deployment: String,
}

impl AzureCodeAssistant {
    pub fn new(github: Arc<GitHubClient>, openai: AzureOpenAIClient, deployment: impl Into<String>) -> Self {
        AzureCodeAssistant {
            github,
            openai,
            deployment: deployment.into(),
        }
    }

    async fn ask(&self, question: &str, code_url: &str) -> Result<String> {
        let code = self
            .github
            .fetch_file_text(code_url)
            .await
            .with_context(|| format!("コード取得失敗: {}", code_url))?;

        let messages = vec![
            ChatMessage::system(code_question_prompt(code_url, &code)),
            ChatMessage::user(question),
        ];

        info!("[{}] 質問送信: {}", self.openai.endpoint_name(), code_url);

        self.openai
            .chat_completion(&messages, &self.deployment, 4000, 0.2)
            .await
            .inspect_err(|e| error!("[{}] OpenAI API エラー: {}", self.openai.endpoint_name(), e))
    }
}

impl CodeAssistant for AzureCodeAssistant {
    fn answer<'a>(&'a self, question: &'a str, code_url: &'a str) -> BoxFuture<'a, Result<String>> {
        self.ask(question, code_url).boxed()
    }
}
