// LLMモジュール - コードに関する質問をLLMに転送する機能をまとめたモジュール

pub mod client;
pub mod prompts;
pub mod schemas;

use anyhow::Result;
use futures::future::BoxFuture;

pub use client::{AzureCodeAssistant, AzureOpenAIClient};

/// 質問とコードURLを受け取って回答を返す相手
///
/// `/ask_code_llm` と `/summarize_using_llm` の両方がこれに委譲する。
pub trait CodeAssistant: Send + Sync {
    fn answer<'a>(&'a self, question: &'a str, code_url: &'a str) -> BoxFuture<'a, Result<String>>;
}
