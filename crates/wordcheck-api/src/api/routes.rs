//! ルーター定義

use axum::{
  Router,
  http::{HeaderName, HeaderValue},
  routing::get,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::handlers::{
  ALLOWED_METHODS, get_lookup, health_check, method_not_allowed, post_lookup, preflight,
};
use super::state::AppState;
use crate::errors::ApiError;

/// ルックアップエンドポイントのパス
pub const LOOKUP_PATH: &str = "/lookup";

/// 旧デプロイ先（Netlify Functions）と同じパス
pub const LEGACY_LOOKUP_PATH: &str = "/.netlify/functions/lookup";

/// ルックアップ系レスポンスに必ず付けるヘッダー
const LOOKUP_HEADERS: [(&str, &str); 4] = [
  ("content-type", "application/json; charset=utf-8"),
  ("access-control-allow-origin", "*"),
  ("access-control-allow-methods", ALLOWED_METHODS),
  ("access-control-allow-headers", "Content-Type"),
];

/// ルックアップ用ルーター（JSON + CORS ヘッダー付き）
///
/// エラーレスポンスを含むすべての応答にヘッダーを上書きで付与する。
/// 未対応メソッドは JSON の 405 を返す。
fn lookup_router() -> Router<AppState> {
  let lookup = get(get_lookup)
    .post(post_lookup)
    .options(preflight)
    .fallback(method_not_allowed);

  let [content_type, allow_origin, allow_methods, allow_headers] =
    LOOKUP_HEADERS.map(|(name, value)| {
      SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
      )
    });

  Router::new()
    .route(LOOKUP_PATH, lookup.clone())
    .route(LEGACY_LOOKUP_PATH, lookup)
    .layer(
      ServiceBuilder::new()
        .layer(content_type)
        .layer(allow_origin)
        .layer(allow_methods)
        .layer(allow_headers),
    )
}

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .merge(lookup_router())
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::internal(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}{}", addr, LOOKUP_PATH);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
