//! wordcheck 辞書ルックアップライブラリー
//!
//! 辞書 API (Merriam-Webster Collegiate) のレスポンスを解釈し、
//! 単語が辞書にあるか（定義）、ないか（綴りの候補）を判定する。
//! I/O は行わない。HTTP 境界は `wordcheck-api` クレートが担当する。

/// エラーモジュール - WordcheckError, WordcheckResult を定義
pub mod errors;

/// データモデルモジュール - 上流ペイロードと LookupResult を定義
pub mod models;

/// リゾルバーモジュール - 正規化と照合・分類アルゴリズム
pub mod resolver;

/// 再エクスポート
pub use errors::{WordcheckError, WordcheckResult};
pub use models::{DefinitionalEntry, LookupResult, UpstreamEntry, UpstreamPayload};
pub use resolver::{normalize, resolve};
