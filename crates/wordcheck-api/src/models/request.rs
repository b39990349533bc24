//! リクエストモデル定義

use serde_json::Value as JsonValue;

use crate::errors::{ApiError, Result};

/// クエリ文字列・JSON ボディ上のパラメーター名
const WORD_PARAM: &str = "word";

/// 単語ルックアップリクエスト
///
/// `GET /lookup?word=...` のクエリ、`POST /lookup` の JSON ボディの両方から作る。
#[derive(Debug, Default)]
pub struct LookupRequest {
  /// 調べる単語
  pub word: Option<String>,
}

impl LookupRequest {
  /// クエリ文字列のペアからリクエストを作る
  ///
  /// `word` が複数ある場合は最初の値を使う。
  #[must_use]
  pub fn from_query(pairs: Vec<(String, String)>) -> Self {
    let word = pairs.into_iter().find(|(key, _)| key == WORD_PARAM).map(|(_, value)| value);
    Self { word }
  }

  /// POST ボディからリクエストを読み取る
  ///
  /// - 長さ 0 のボディは `{}` として扱う（後段で 400 になる）
  /// - オブジェクト: `word` が文字列ならそれを使う。`null`・`false`・`0`・`""` は未指定扱い
  /// - `null`: 想定外エラー
  /// - 配列・文字列・数値・真偽値: `word` なし（後段で 400 になる）
  ///
  /// # Errors
  /// ボディが JSON として不正（空白のみを含む）、ボディが `null`、
  /// または `word` が文字列以外の真値の場合は想定外エラー
  pub fn from_body(body: &[u8]) -> Result<Self> {
    if body.is_empty() {
      return Ok(Self::default());
    }

    let value: JsonValue =
      serde_json::from_slice(body).map_err(|e| ApiError::unexpected(e.to_string()))?;

    match value {
      JsonValue::Object(mut object) => match object.remove(WORD_PARAM) {
        Some(JsonValue::String(word)) => Ok(Self { word: Some(word) }),
        Some(other) if is_falsy(&other) => Ok(Self::default()),
        None => Ok(Self::default()),
        Some(other) => Err(ApiError::unexpected(format!(
          "'{WORD_PARAM}' must be a string, got {other}"
        ))),
      },
      JsonValue::Null => Err(ApiError::unexpected(format!(
        "request body is null; cannot read '{WORD_PARAM}'"
      ))),
      _ => Ok(Self::default()),
    }
  }

  /// 前後の空白を除いた単語。空なら `None`
  #[must_use]
  pub fn trimmed_word(&self) -> Option<&str> {
    self.word.as_deref().map(str::trim).filter(|w| !w.is_empty())
  }
}

/// JSON 値が偽値（`null`・`false`・`0`・`""`）かどうか
fn is_falsy(value: &JsonValue) -> bool {
  match value {
    JsonValue::Null => true,
    JsonValue::Bool(b) => !b,
    JsonValue::Number(n) => n.as_f64() == Some(0.0),
    JsonValue::String(s) => s.is_empty(),
    JsonValue::Array(_) | JsonValue::Object(_) => false,
  }
}
