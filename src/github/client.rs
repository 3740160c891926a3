// GitHubクライアント

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use log::debug;
use reqwest::{StatusCode, Url, header};
use serde_json::Value;

use super::reference::RepositoryReference;
use super::schemas::{ContentEntry, ContentsResponse};
use crate::error::FetchError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("repo-lens/", env!("CARGO_PKG_VERSION"));

/// コンテンツAPI用のクライアント
///
/// トークンは起動時に一度だけ設定され、以降は読み取り専用。
#[derive(Clone, Debug)]
pub struct GitHubClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

impl GitHubClient {
    pub fn new(token: impl Into<String>, api_base: impl Into<String>) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(GitHubClient {
            client,
            token: token.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{base}/repos/{owner}/{name}/contents/{path}`
    ///
    /// `path` の各セグメントはパーセントエンコードされる（`#` や `?` を含む名前のため）。
    /// ルートでは末尾の `/` がそのまま残る。
    pub fn contents_url(&self, reference: &RepositoryReference, path: &str) -> Result<String, FetchError> {
        let malformed = || FetchError::MalformedUrl(self.api_base.clone());

        let mut url = Url::parse(&self.api_base).map_err(|_| malformed())?;
        url.path_segments_mut()
            .map_err(|_| malformed())?
            .pop_if_empty()
            .extend(["repos", reference.owner.as_str(), reference.name.as_str(), "contents"])
            .extend(path.split('/'));

        Ok(url.into())
    }

    /// 認証付きでGETし、200ならJSONボディを返す
    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("⬇️ GitHub API リクエスト: {}", url);

        let mut request = self.client.get(url);
        if !self.token.is_empty() {
            request = request.header(header::AUTHORIZATION, format!("token {}", self.token));
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// GETした結果をコンテンツAPIの応答として解釈する
    pub async fn get_contents(&self, url: &str) -> Result<ContentsResponse, FetchError> {
        let body = self.get_json(url).await?;
        serde_json::from_value(body).map_err(|e| FetchError::Payload {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// 単一ファイルのコンテンツAPI URLから本文を取得してデコードする
    ///
    /// トークンを付けて送るため、APIベース配下の `/repos/` 以外のURLは拒否する。
    pub async fn fetch_file_text(&self, url: &str) -> Result<String, FetchError> {
        if !url.starts_with(&format!("{}/repos/", self.api_base)) {
            return Err(FetchError::MalformedUrl(url.to_string()));
        }

        match self.get_contents(url).await? {
            ContentsResponse::Single(entry) => match decode_entry_content(&entry)? {
                Some(text) => Ok(text),
                None => Err(FetchError::Payload {
                    url: url.to_string(),
                    reason: format!("{} にインラインの内容がありません", entry.path),
                }),
            },
            ContentsResponse::Listing(_) => Err(FetchError::Payload {
                url: url.to_string(),
                reason: "ファイルではなくディレクトリです".to_string(),
            }),
        }
    }
}

/// エントリの `content` をUTF-8テキストにデコードする
///
/// 内容が含まれていない場合（大きなファイルなど）は `None`。
pub fn decode_entry_content(entry: &ContentEntry) -> Result<Option<String>, FetchError> {
    let Some(raw) = entry.content.as_deref() else {
        return Ok(None);
    };

    if let Some(encoding) = entry.encoding.as_deref() {
        // 1MBを超えるファイルは encoding "none" で内容が空になる
        if encoding == "none" {
            return Ok(None);
        }
        if encoding != "base64" {
            return Err(FetchError::Decode {
                path: entry.path.clone(),
                reason: format!("未対応のエンコーディング: {}", encoding),
            });
        }
    }

    // GitHubは60文字ごとに改行を入れて返す
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64.decode(compact).map_err(|e| FetchError::Decode {
        path: entry.path.clone(),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes).map(Some).map_err(|e| FetchError::Decode {
        path: entry.path.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(content: Option<&str>, encoding: Option<&str>) -> ContentEntry {
        ContentEntry {
            item_type: "file".to_string(),
            name: "a.txt".to_string(),
            path: "a.txt".to_string(),
            html_url: None,
            url: None,
            content: content.map(str::to_string),
            encoding: encoding.map(str::to_string),
        }
    }

    #[test]
    fn decodes_wrapped_base64() {
        let decoded = decode_entry_content(&entry(Some("aGVsbG8g\nd29ybGQ=\n"), Some("base64"))).unwrap();
        assert_eq!(decoded.as_deref(), Some("hello world"));
    }

    #[test]
    fn missing_content_is_none() {
        assert_eq!(decode_entry_content(&entry(None, None)).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        // 0xff 0xfe
        let err = decode_entry_content(&entry(Some("//4="), Some("base64"))).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn unknown_encoding_is_decode_error() {
        let err = decode_entry_content(&entry(Some("hi"), Some("utf-16"))).unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn oversized_file_without_inline_content_is_none() {
        assert_eq!(decode_entry_content(&entry(Some(""), Some("none"))).unwrap(), None);
    }

    #[test]
    fn contents_url_keeps_trailing_slash_at_root() {
        let client = GitHubClient::new("t", "https://api.github.com/").unwrap();
        let reference = RepositoryReference {
            owner: "o".to_string(),
            name: "r".to_string(),
        };
        assert_eq!(
            client.contents_url(&reference, "").unwrap(),
            "https://api.github.com/repos/o/r/contents/"
        );
        assert_eq!(
            client.contents_url(&reference, "src/lib.rs").unwrap(),
            "https://api.github.com/repos/o/r/contents/src/lib.rs"
        );
    }

    #[test]
    fn contents_url_encodes_reserved_characters() {
        let client = GitHubClient::new("t", "https://api.github.com").unwrap();
        let reference = RepositoryReference {
            owner: "o".to_string(),
            name: "r".to_string(),
        };
        assert_eq!(
            client.contents_url(&reference, "docs/#notes").unwrap(),
            "https://api.github.com/repos/o/r/contents/docs/%23notes"
        );
        assert_eq!(
            client.contents_url(&reference, "?draft").unwrap(),
            "https://api.github.com/repos/o/r/contents/%3Fdraft"
        );
    }

    #[test]
    fn contents_url_keeps_api_base_path() {
        let client = GitHubClient::new("t", "https://ghe.example.com/api/v3").unwrap();
        let reference = RepositoryReference {
            owner: "o".to_string(),
            name: "r".to_string(),
        };
        assert_eq!(
            client.contents_url(&reference, "a.txt").unwrap(),
            "https://ghe.example.com/api/v3/repos/o/r/contents/a.txt"
        );
    }

    #[test]
    fn invalid_api_base_is_malformed() {
        let client = GitHubClient::new("t", "not a url").unwrap();
        let reference = RepositoryReference {
            owner: "o".to_string(),
            name: "r".to_string(),
        };
        assert!(matches!(
            client.contents_url(&reference, ""),
            Err(FetchError::MalformedUrl(_))
        ));
    }
}
