//! wordcheck-api サーバーエントリーポイント

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wordcheck_api::ApiError;
use wordcheck_api::api::AppState;
use wordcheck_api::api::run_server;
use wordcheck_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env があれば読み込む（無くてもよい）
  let dotenv = dotenvy::dotenv();

  // ロギングの初期化
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  if let Ok(path) = dotenv {
    tracing::debug!(path = %path.display(), ".env を読み込みました");
  }

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr,
    upstream_url = %config.upstream_url,
    timeout_ms = config.upstream_timeout.as_millis() as u64,
    "設定を読み込みました"
  );
  if config.api_key.is_none() {
    tracing::warn!("MW_COLLEGIATE_KEY が未設定です。ルックアップは 500 を返します");
  }

  // アプリケーション状態の作成（辞書 API クライアントの初期化を含む）
  let state = AppState::from_config(config)?;

  // サーバー起動
  run_server(state).await
}
