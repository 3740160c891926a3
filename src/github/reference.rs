// リポジトリURLの解析

use crate::error::FetchError;

const GITHUB_SEPARATOR: &str = "github.com/";

/// `owner/name` で識別されるリポジトリ
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl RepositoryReference {
    /// `https://github.com/owner/name` 形式のURLを分解する
    ///
    /// 区切り `github.com/` の後ろがちょうど2セグメントでなければ
    /// [`FetchError::MalformedUrl`] を返す。通信は一切行わない。
    pub fn parse(repo_url: &str) -> Result<Self, FetchError> {
        let malformed = || FetchError::MalformedUrl(repo_url.to_string());

        let (_, rest) = repo_url.rsplit_once(GITHUB_SEPARATOR).ok_or_else(malformed)?;

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepositoryReference {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(malformed()),
        }
    }

    /// `owner/name`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// ファイルのコンテンツAPI URLを組み立てる
///
/// `file_path` は先頭に `/` を含む前提で、`contents` との間に区切りは挟まない。
pub fn file_url(api_base: &str, repo_url: &str, file_path: &str) -> Result<String, FetchError> {
    let reference = RepositoryReference::parse(repo_url)?;
    Ok(format!(
        "{}/repos/{}/{}/contents{}",
        api_base.trim_end_matches('/'),
        reference.owner,
        reference.name,
        file_path
    ))
}
