// HTTPサーバー - ルーティングとエラー応答

pub mod handlers;
pub mod schemas;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use log::error;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::error::FetchError;
use crate::github::GitHubClient;
use crate::llm::CodeAssistant;

/// リクエスト間で共有する状態
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
    pub assistant: Arc<dyn CodeAssistant>,
}

impl AppState {
    pub fn new(github: Arc<GitHubClient>, assistant: Arc<dyn CodeAssistant>) -> Self {
        AppState { github, assistant }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get_structure_clean", post(handlers::get_structure_clean))
        .route("/get_structure_blob", post(handlers::get_structure_blob))
        .route("/get_structure_comb", post(handlers::get_structure_comb))
        .route("/ask_code_llm", post(handlers::ask_code_llm))
        .route("/summarize_using_llm", post(handlers::summarize_using_llm))
        .route("/get_file_url", post(handlers::get_file_url))
        .layer(cors)
        .with_state(state)
}

/// 500として返すエラー
#[derive(Debug)]
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("❌ リクエスト処理エラー: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": format!("{:#}", self.0) })),
        )
            .into_response()
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        ApiError(e.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError(e)
    }
}
