//! 再帰チェーンの継続判定
//!
//! 継続条件はマーカー接頭辞との完全一致（大文字小文字を区別し、正規化しない）。
//! モデルの言い換えや空白ゆれで止まるのは仕様どおりで、「修正」しない。

/// チェーン継続のマーカー接頭辞
pub const MARKER_PREFIX: &str = "You are a recursive function";

/// テキストがマーカー接頭辞で始まるかどうか
///
/// 先頭の空白があると一致しない（入力・応答とも呼び出し側で trim 済みの前提）。
pub fn continues_chain(text: &str) -> bool {
    text.starts_with(MARKER_PREFIX)
}
