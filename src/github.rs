// GitHubモジュール - コンテンツAPIからリポジトリ構造を取得する機能をまとめたモジュール

pub mod client;
pub mod reference;
pub mod schemas;
pub mod tree;

pub use client::GitHubClient;
pub use reference::{RepositoryReference, file_url};
pub use schemas::{CleanNode, CombinedNode};
pub use tree::{fetch_blob, fetch_clean, fetch_combined};
