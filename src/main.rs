// repo-lens - GitHubリポジトリの構造取得とLLMへのコード質問を提供するAPIサーバー

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::{info, warn};
use simple_logger::SimpleLogger;

use repo_lens::config::Args;
use repo_lens::github::GitHubClient;
use repo_lens::llm::{AzureCodeAssistant, AzureOpenAIClient};
use repo_lens::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // .envファイルを読み込み
    dotenv().ok();

    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("ロガー初期化失敗")?;

    if args.github_token.is_empty() {
        warn!("⚠️ GITHUB_TOKEN が未設定のため匿名でアクセスします");
    }
    if args.azure_endpoint.is_empty() || args.azure_key.is_empty() {
        warn!("⚠️ Azure OpenAI の設定が不足しています。LLMエンドポイントは失敗します");
    }

    let github = Arc::new(
        GitHubClient::new(args.github_token.clone(), args.github_api_base.clone())
            .context("HTTPクライアントの作成に失敗")?,
    );

    let openai = AzureOpenAIClient::new(args.openai_endpoint(), args.azure_api_version.clone());
    let assistant = Arc::new(AzureCodeAssistant::new(
        github.clone(),
        openai,
        args.azure_deployment.clone(),
    ));

    let app = server::router(AppState::new(github, assistant));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("{} で待ち受けできません", args.bind))?;

    info!("🚀 repo-lens 起動: http://{}", args.bind);

    axum::serve(listener, app).await.context("サーバー停止")?;

    Ok(())
}
