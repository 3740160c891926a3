// リポジトリ構造の取得
//
// どの形でも深さ優先・行きがけ順で、子はAPIが返した順に1件ずつ取得する。

use futures::FutureExt;
use futures::future::BoxFuture;
use log::{info, warn};
use serde_json::Value;

use super::client::{GitHubClient, decode_entry_content};
use super::reference::RepositoryReference;
use super::schemas::{CleanNode, CombinedNode, ContentEntry, ContentsResponse};
use crate::error::FetchError;

/// URLとファイル内容を含むツリーを取得する
///
/// `path` が空ならリポジトリのルートから。サブディレクトリの取得が
/// ソフトに失敗した場合、その位置には `None` が入る。
pub async fn fetch_combined(
    github: &GitHubClient,
    repo_url: &str,
    path: &str,
) -> Result<CombinedNode, FetchError> {
    let reference = RepositoryReference::parse(repo_url)?;
    info!("🌳 ツリー取得開始 (comb): {} /{}", reference.slug(), path);

    combined_walk(github, &reference, path.to_string()).await
}

/// 名前と種類だけのエントリ一覧を取得する
pub async fn fetch_clean(
    github: &GitHubClient,
    repo_url: &str,
    path: &str,
) -> Result<Vec<CleanNode>, FetchError> {
    let reference = RepositoryReference::parse(repo_url)?;
    info!("🌳 ツリー取得開始 (clean): {} /{}", reference.slug(), path);

    clean_walk(github, &reference, path.to_string()).await
}

/// 指定パスのAPI応答をそのまま返す（再帰なし）
pub async fn fetch_blob(github: &GitHubClient, repo_url: &str, path: &str) -> Result<Value, FetchError> {
    let reference = RepositoryReference::parse(repo_url)?;
    info!("📦 コンテンツ取得 (blob): {} /{}", reference.slug(), path);

    github.get_json(&github.contents_url(&reference, path)?).await
}

fn combined_walk<'a>(
    github: &'a GitHubClient,
    reference: &'a RepositoryReference,
    path: String,
) -> BoxFuture<'a, Result<CombinedNode, FetchError>> {
    async move {
        let api_url = github.contents_url(reference, &path)?;

        let entries = match github.get_contents(&api_url).await? {
            ContentsResponse::Listing(entries) => entries,
            ContentsResponse::Single(entry) => return file_node(&entry, &api_url),
        };

        let mut content = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.is_dir() {
                let child = combined_walk(github, reference, entry.path.clone()).await;
                content.push(absorb_soft(child, &entry.path)?);
            } else {
                content.push(Some(file_node(entry, &api_url)?));
            }
        }

        Ok(CombinedNode::Dir {
            name: dir_name(reference, &path),
            content,
            url: api_url.clone(),
            api_url,
        })
    }
    .boxed()
}

fn clean_walk<'a>(
    github: &'a GitHubClient,
    reference: &'a RepositoryReference,
    path: String,
) -> BoxFuture<'a, Result<Vec<CleanNode>, FetchError>> {
    async move {
        let api_url = github.contents_url(reference, &path)?;

        let entries = match github.get_contents(&api_url).await? {
            ContentsResponse::Listing(entries) => entries,
            ContentsResponse::Single(entry) => return Ok(vec![CleanNode::File { name: entry.name }]),
        };

        let mut structure = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.is_dir() {
                let contents = clean_walk(github, reference, entry.path.clone()).await;
                structure.push(CleanNode::Dir {
                    contents: absorb_soft(contents, &entry.path)?,
                    name: entry.name,
                });
            } else {
                structure.push(CleanNode::File { name: entry.name });
            }
        }

        Ok(structure)
    }
    .boxed()
}

// ファイルの api_url は親ディレクトリの一覧URLを使う
fn file_node(entry: &ContentEntry, api_url: &str) -> Result<CombinedNode, FetchError> {
    Ok(CombinedNode::File {
        name: entry.name.clone(),
        path: entry.path.clone(),
        content: decode_entry_content(entry)?,
        url: entry.html_url.clone(),
        api_url: api_url.to_string(),
    })
}

fn dir_name(reference: &RepositoryReference, path: &str) -> String {
    match path.rsplit('/').next() {
        Some(last) if !path.is_empty() => last.to_string(),
        _ => reference.name.clone(),
    }
}

// ソフトな失敗は None に畳み込み、ハードな失敗はそのまま返す
fn absorb_soft<T>(result: Result<T, FetchError>, path: &str) -> Result<Option<T>, FetchError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_soft() => {
            warn!("⚠️ サブディレクトリ取得失敗: {} - {}", path, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
