// コマンドライン引数と環境変数による設定

use std::net::SocketAddr;

use clap::Parser;

use crate::github::client::DEFAULT_API_BASE;
use crate::llm::client::DEFAULT_API_VERSION;
use crate::llm::schemas::Endpoint;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repo-lens",
    about = "GitHubリポジトリの構造取得とコードへの質問を提供するAPIサーバー",
    version
)]
pub struct Args {
    /// GitHubのアクセストークン（空なら匿名アクセス）
    #[clap(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    pub github_token: String,

    /// GitHub APIのベースURL
    #[clap(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE)]
    pub github_api_base: String,

    /// 待ち受けアドレス
    #[clap(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Azure OpenAIのエンドポイントURL
    #[clap(long, env = "AZURE_OPENAI_ENDPOINT", default_value = "")]
    pub azure_endpoint: String,

    /// Azure OpenAIのAPIキー
    #[clap(long, env = "AZURE_OPENAI_KEY", default_value = "", hide_env_values = true)]
    pub azure_key: String,

    /// デプロイメント名
    #[clap(long, env = "AZURE_OPENAI_DEPLOYMENT", default_value = "gpt-4")]
    pub azure_deployment: String,

    /// APIバージョン
    #[clap(long, env = "AZURE_OPENAI_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub azure_api_version: String,

    /// ログレベル（error, warn, info, debug, trace）
    #[clap(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl Args {
    pub fn openai_endpoint(&self) -> Endpoint {
        Endpoint {
            name: "azure".to_string(),
            key: self.azure_key.clone(),
            endpoint: self.azure_endpoint.clone(),
        }
    }
}
