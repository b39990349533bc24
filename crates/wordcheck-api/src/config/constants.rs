//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// デフォルトの辞書 API エンドポイント
///
/// Merriam-Webster Collegiate Dictionary (v3)。
/// 末尾に `/<単語>?key=<APIキー>` を付けて問い合わせる。
pub const DEFAULT_UPSTREAM_URL: &str =
  "https://www.dictionaryapi.com/api/v3/references/collegiate/json";

/// 上流リクエストのデフォルトタイムアウト（ミリ秒）
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// バインドアドレスの環境変数名
pub const ENV_BIND_ADDR: &str = "WORDCHECK_API_BIND_ADDR";

/// 辞書 API キーの環境変数名
pub const ENV_API_KEY: &str = "MW_COLLEGIATE_KEY";

/// 辞書 API エンドポイントの環境変数名
pub const ENV_UPSTREAM_URL: &str = "WORDCHECK_UPSTREAM_URL";

/// 上流タイムアウトの環境変数名
pub const ENV_UPSTREAM_TIMEOUT_MS: &str = "WORDCHECK_UPSTREAM_TIMEOUT_MS";
