//! APIエラー定義

use std::error::Error as StdError;

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use wordcheck::WordcheckError;

use crate::config::ENV_API_KEY;

/// `word` が空のときのメッセージ
pub const MISSING_WORD_MESSAGE: &str = "Missing 'word' parameter.";

/// 想定外エラーの汎用メッセージ
pub const UNEXPECTED_MESSAGE: &str = "Unexpected server error.";

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// 未対応の HTTP メソッド
  MethodNotAllowed,
  /// 設定エラー
  Config,
  /// 上流（辞書 API）がエラーを返した
  Upstream,
  /// リクエスト処理中の想定外エラー
  Unexpected,
  /// サーバー内部エラー
  Internal,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::MethodNotAllowed => "method_not_allowed",
      Self::Config => "config_error",
      Self::Upstream => "upstream_error",
      Self::Unexpected => "unexpected_error",
      Self::Internal => "internal_error",
    }
  }

  /// HTTPステータスコードを取得
  ///
  /// `Upstream` は実際には上流のステータスをそのまま返す（[`ApiError::status`] を参照）。
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      Self::Upstream => StatusCode::BAD_GATEWAY,
      Self::Config | Self::Unexpected | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("{0}")]
  InvalidInput(String),

  /// 未対応の HTTP メソッド
  #[error("Method not allowed.")]
  MethodNotAllowed,

  /// 設定エラー
  #[error("{0}")]
  Config(String),

  /// 上流が非成功ステータスを返した
  #[error("Upstream error {}", .0.as_u16())]
  Upstream(StatusCode),

  /// 想定外エラー（ネットワーク障害、JSON パース失敗など）
  #[error("Unexpected server error.")]
  Unexpected {
    /// 元となったエラーの文字列
    detail: String,
  },

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::MethodNotAllowed => ApiErrorKind::MethodNotAllowed,
      Self::Config(_) => ApiErrorKind::Config,
      Self::Upstream(_) => ApiErrorKind::Upstream,
      Self::Unexpected { .. } => ApiErrorKind::Unexpected,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  ///
  /// 上流エラーは上流のステータスをそのまま返す。
  /// ただし 1xx は最終レスポンスにできないため 502 に置き換える。
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Upstream(status) if !status.is_informational() => *status,
      _ => self.kind().status(),
    }
  }

  /// 詳細メッセージ（想定外エラーのみ）
  #[must_use]
  pub fn detail(&self) -> Option<&str> {
    match self {
      Self::Unexpected { detail } => Some(detail),
      _ => None,
    }
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// `word` 未指定エラーを作成
  #[must_use]
  pub fn missing_word() -> Self {
    Self::invalid_input(MISSING_WORD_MESSAGE)
  }

  /// 未対応メソッドエラーを作成
  #[must_use]
  pub fn method_not_allowed() -> Self {
    Self::MethodNotAllowed
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// API キー未設定エラーを作成
  #[must_use]
  pub fn missing_api_key() -> Self {
    Self::config(format!("Server not configured: missing {ENV_API_KEY}."))
  }

  /// 上流エラーを作成
  #[must_use]
  pub fn upstream(status: StatusCode) -> Self {
    Self::Upstream(status)
  }

  /// 想定外エラーを作成
  #[must_use]
  pub fn unexpected(detail: impl Into<String>) -> Self {
    Self::Unexpected {
      detail: detail.into(),
    }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
  code: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  detail: Option<String>,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.to_string(),
      code: self.code(),
      detail: self.detail().map(str::to_string),
    };

    (status, Json(body)).into_response()
  }
}

/// エラーとその source を ": " で連結する
fn error_chain(err: &dyn StdError) -> String {
  let mut message = err.to_string();
  let mut source = err.source();
  while let Some(cause) = source {
    message.push_str(": ");
    message.push_str(&cause.to_string());
    source = cause.source();
  }
  message
}

/// reqwest のエラーから ApiError への変換
///
/// URL には API キーがクエリとして含まれるため、取り除いてから文字列化する。
impl From<reqwest::Error> for ApiError {
  fn from(err: reqwest::Error) -> Self {
    ApiError::unexpected(error_chain(&err.without_url()))
  }
}

/// WordcheckError から ApiError への変換
///
/// ドメイン層のエラー（上流ペイロードが JSON でない）を想定外エラーにマッピングする。
impl From<WordcheckError> for ApiError {
  fn from(err: WordcheckError) -> Self {
    match err {
      WordcheckError::MalformedPayload { .. } => ApiError::unexpected(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::unexpected(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
