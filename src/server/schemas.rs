// リクエスト・レスポンスのボディ

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::github::{CleanNode, CombinedNode};

#[derive(Debug, Deserialize)]
pub struct RepoUrl {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryCodeUrl {
    pub query: String,
    pub codeurl: String,
}

#[derive(Debug, Deserialize)]
pub struct RepoUrlFilePath {
    pub repo_url: String,
    pub file_path: String,
}

#[derive(Debug, Serialize)]
pub struct CleanResponse {
    pub clean: Option<Vec<CleanNode>>,
}

#[derive(Debug, Serialize)]
pub struct BlobResponse {
    pub blob: Option<Value>,
}

/// 結合ツリーもフィールド名は `blob`
#[derive(Debug, Serialize)]
pub struct CombinedResponse {
    pub blob: Option<CombinedNode>,
}

#[derive(Debug, Serialize)]
pub struct LlmResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct FileUrlResponse {
    pub file_url: String,
}
