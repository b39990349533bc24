//! 照合用の正規化モジュール
//!
//! 要求された単語と見出し語・エントリー ID を比較するためのキーを作る。
//! 出力に使う元の文字列は変更しない。

/// 比較時に無視する記号
///
/// ストレート/カーリーの一重・二重引用符、ハイフン、アンダースコア、ピリオド。
const IGNORED_PUNCTUATION: [char; 9] = [
  '\'', '\u{2018}', '\u{2019}', '"', '\u{201C}', '\u{201D}', '-', '_', '.',
];

/// 文字列を照合用キーに正規化する純粋関数
///
/// # 処理内容
/// - 小文字化
/// - 空白文字（Unicode の空白を含む）の除去
/// - 引用符・ハイフン・アンダースコア・ピリオドの除去
///
/// # 例
/// - `"Test's"` → `"tests"`
/// - `"TEST’S"` → `"tests"`
/// - `"ice-cream"` → `"icecream"`
pub fn normalize(s: &str) -> String {
  s.to_lowercase()
    .chars()
    .filter(|c| !c.is_whitespace() && !IGNORED_PUNCTUATION.contains(c))
    .collect()
}
