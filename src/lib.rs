// repo-lens - GitHubリポジトリの構造取得とコード質問のバックエンド

pub mod config;
pub mod error;
pub mod github;
pub mod llm;
pub mod server;

pub use error::FetchError;
