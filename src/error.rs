// ツリー取得まわりのエラー定義

use thiserror::Error;

/// GitHubコンテンツ取得のエラー
///
/// 通信前に判明するもの（URL不正）とデコード失敗は「ハード」、
/// 上流APIの失敗は「ソフト」として扱う。
#[derive(Debug, Error)]
pub enum FetchError {
    /// `github.com/owner/name` の形になっていないURL
    #[error("不正なリポジトリURL: {0}")]
    MalformedUrl(String),

    /// base64またはUTF-8としてデコードできないファイル内容
    #[error("ファイル内容のデコード失敗: {path} - {reason}")]
    Decode { path: String, reason: String },

    /// 200以外のステータス
    #[error("GitHub API エラー: ステータス {status}, URL: {url}")]
    Status { url: String, status: u16 },

    /// 通信エラーやレスポンスボディの読み取り失敗
    #[error("GitHub API リクエスト失敗: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSONとしては読めたがコンテンツAPIの形になっていない応答
    #[error("想定外のレスポンス形式: {url} - {reason}")]
    Payload { url: String, reason: String },
}

impl FetchError {
    /// 呼び出し側で「結果なし」に畳み込んでよいエラーかどうか
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            FetchError::Status { .. } | FetchError::Transport(_) | FetchError::Payload { .. }
        )
    }
}
