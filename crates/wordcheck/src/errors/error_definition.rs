//! エラー定義

use std::sync::Arc;
use thiserror::Error;

/// wordcheck クレート全体のエラー
///
/// リゾルバー本体は失敗しない。エラーになり得るのは
/// 上流レスポンスのバイト列を JSON として読めなかった場合のみ。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordcheckError {
  /// 上流ペイロードが JSON として不正
  #[error("upstream payload is not valid JSON: {source}")]
  MalformedPayload {
    /// 元となった JSON エラー
    #[source]
    source: Arc<serde_json::Error>,
  },
}

impl From<serde_json::Error> for WordcheckError {
  fn from(err: serde_json::Error) -> Self {
    Self::MalformedPayload {
      source: Arc::new(err),
    }
  }
}

/// wordcheck 用の Result 型エイリアス
pub type WordcheckResult<T> = std::result::Result<T, WordcheckError>;
