//! Shared mockito fixtures for the contents API

#![allow(dead_code)]

use std::sync::Mutex;

use futures::FutureExt;
use futures::future::BoxFuture;
use mockito::{Matcher, Mock, ServerGuard};
use repo_lens::github::GitHubClient;
use repo_lens::llm::CodeAssistant;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const REPO_URL: &str = "https://github.com/o/r";

pub fn client(server: &ServerGuard) -> GitHubClient {
    GitHubClient::new(TOKEN, server.url()).unwrap()
}

/// Root listing: `a.txt` ("hi") and `sub/`
pub fn root_listing() -> Value {
    json!([
        {
            "type": "file",
            "name": "a.txt",
            "path": "a.txt",
            "sha": "32f95c0d1244a5c5b6e4d1c1e1e4e0b5ea0b1a4d",
            "size": 2,
            "html_url": "https://github.com/o/r/blob/main/a.txt",
            "content": "aGk=",
            "encoding": "base64"
        },
        {
            "type": "dir",
            "name": "sub",
            "path": "sub",
            "sha": "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c",
            "size": 0,
            "html_url": "https://github.com/o/r/tree/main/sub"
        }
    ])
}

/// `sub/` listing: `b.txt` ("yo")
pub fn sub_listing() -> Value {
    json!([
        {
            "type": "file",
            "name": "b.txt",
            "path": "sub/b.txt",
            "size": 2,
            "html_url": "https://github.com/o/r/blob/main/sub/b.txt",
            "content": "eW8=",
            "encoding": "base64"
        }
    ])
}

pub async fn mock_contents(server: &mut ServerGuard, path: &str, status: usize, body: &Value) -> Mock {
    server
        .mock("GET", format!("/repos/o/r/contents/{}", path).as_str())
        .match_header("authorization", format!("token {}", TOKEN).as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}

/// Mounts the two-level fixture tree
pub async fn mock_two_level_tree(server: &mut ServerGuard) -> (Mock, Mock) {
    let root = mock_contents(server, "", 200, &root_listing()).await;
    let sub = mock_contents(server, "sub", 200, &sub_listing()).await;
    (root, sub)
}

/// Every path answers 404
pub async fn mock_not_found(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#)
        .create_async()
        .await
}

/// Records every question and answers with a fixed echo
#[derive(Default)]
pub struct RecordingAssistant {
    pub calls: Mutex<Vec<(String, String)>>,
}

impl CodeAssistant for RecordingAssistant {
    fn answer<'a>(&'a self, question: &'a str, code_url: &'a str) -> BoxFuture<'a, anyhow::Result<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), code_url.to_string()));
        async move { Ok(format!("answer to {question}")) }.boxed()
    }
}
