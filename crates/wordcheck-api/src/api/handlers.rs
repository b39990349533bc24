//! HTTPハンドラー定義

use axum::{
  Json,
  body::Bytes,
  extract::{Query, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use tracing::{debug, error, info, warn};

use crate::errors::ApiError;
use crate::models::{LookupRequest, LookupResponse};

use super::state::AppState;

/// /lookup が受け付けるメソッド
pub(crate) const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";

/// GET /lookup?word=... エンドポイント
///
/// # Response
/// - 200 OK: 判定成功（定義または綴りの候補）
/// - 400 Bad Request: `word` が空
/// - 500 Internal Server Error: API キー未設定、想定外エラー
/// - 上流のステータス: 辞書 API がエラーを返した
///
/// `word` が複数ある場合は最初の値を使う。
pub async fn get_lookup(
  State(state): State<AppState>,
  Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<LookupResponse>, ApiError> {
  let request = LookupRequest::from_query(params);
  lookup(&state, &request).await
}

/// POST /lookup エンドポイント
///
/// # Request Body
/// ```json
/// { "word": "調べる単語" }
/// ```
///
/// ボディは自前でパースする。JSON として不正な場合は 500（想定外エラー）になる。
/// ステータスは GET と同じ。
pub async fn post_lookup(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<LookupResponse>, ApiError> {
  let request = LookupRequest::from_body(&body).inspect_err(log_error)?;
  lookup(&state, &request).await
}

/// OPTIONS /lookup エンドポイント（CORS プリフライト）
///
/// CORS ヘッダーはルーター側のレイヤーで付与する。
pub async fn preflight() -> StatusCode {
  StatusCode::NO_CONTENT
}

/// /lookup でサポートしないメソッド
///
/// 405 を JSON エラーボディと `Allow` ヘッダー付きで返す。
pub async fn method_not_allowed() -> impl IntoResponse {
  ([(header::ALLOW, ALLOWED_METHODS)], ApiError::method_not_allowed())
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

/// GET/POST 共通のルックアップ処理
///
/// 単語の検証（400）を API キーの検証（500）より先に行う。
async fn lookup(
  state: &AppState,
  request: &LookupRequest,
) -> Result<Json<LookupResponse>, ApiError> {
  let word = request.trimmed_word().ok_or_else(ApiError::missing_word)?;
  debug!(word, "ルックアップリクエストを受信");

  let result = state.service.lookup(word).await.inspect_err(log_error)?;

  info!(
    word,
    is_word = result.is_word,
    definitions = result.definitions.len(),
    suggestions = result.suggestions.len(),
    "ルックアップ完了"
  );

  Ok(Json(result))
}

fn log_error(err: &ApiError) {
  match err {
    ApiError::Upstream(status) => warn!(status = status.as_u16(), "上流エラー"),
    ApiError::Unexpected { detail } => error!(detail = %detail, "想定外エラー"),
    ApiError::Config(message) | ApiError::Internal(message) => {
      error!(%message, "サーバーエラー");
    }
    ApiError::InvalidInput(_) | ApiError::MethodNotAllowed => {}
  }
}
