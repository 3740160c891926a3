// 各エンドポイントの処理

use axum::Json;
use axum::extract::State;
use log::warn;

use super::schemas::{
    BlobResponse, CleanResponse, CombinedResponse, FileUrlResponse, LlmResponse, QueryCodeUrl,
    RepoUrl, RepoUrlFilePath,
};
use super::{ApiError, AppState};
use crate::error::FetchError;
use crate::github::{self, file_url};

pub async fn get_structure_clean(
    State(state): State<AppState>,
    Json(data): Json<RepoUrl>,
) -> Result<Json<CleanResponse>, ApiError> {
    let clean = soft_to_none(github::fetch_clean(&state.github, &data.key, "").await)?;
    Ok(Json(CleanResponse { clean }))
}

pub async fn get_structure_blob(
    State(state): State<AppState>,
    Json(data): Json<RepoUrl>,
) -> Result<Json<BlobResponse>, ApiError> {
    let blob = soft_to_none(github::fetch_blob(&state.github, &data.key, "").await)?;
    Ok(Json(BlobResponse { blob }))
}

pub async fn get_structure_comb(
    State(state): State<AppState>,
    Json(data): Json<RepoUrl>,
) -> Result<Json<CombinedResponse>, ApiError> {
    let blob = soft_to_none(github::fetch_combined(&state.github, &data.key, "").await)?;
    Ok(Json(CombinedResponse { blob }))
}

pub async fn ask_code_llm(
    State(state): State<AppState>,
    Json(data): Json<QueryCodeUrl>,
) -> Result<Json<LlmResponse>, ApiError> {
    let response = state.assistant.answer(&data.query, &data.codeurl).await?;
    Ok(Json(LlmResponse { response }))
}

pub async fn summarize_using_llm(
    State(state): State<AppState>,
    Json(data): Json<QueryCodeUrl>,
) -> Result<Json<LlmResponse>, ApiError> {
    let response = state.assistant.answer(&data.query, &data.codeurl).await?;
    Ok(Json(LlmResponse { response }))
}

pub async fn get_file_url(
    State(state): State<AppState>,
    Json(data): Json<RepoUrlFilePath>,
) -> Result<Json<FileUrlResponse>, ApiError> {
    let file_url = file_url(state.github.api_base(), &data.repo_url, &data.file_path)?;
    Ok(Json(FileUrlResponse { file_url }))
}

// ソフトな失敗はクライアントには null として返す
fn soft_to_none<T>(result: Result<T, FetchError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_soft() => {
            warn!("⚠️ 取得失敗のため null を返します: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
