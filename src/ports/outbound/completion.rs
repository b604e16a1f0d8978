//! 単発 LLM 完了の Outbound ポート
//!
//! 1 回のプロンプトで第一候補の応答テキストを取得する。外部コラボレータは
//! この trait の背後にあり、テストではスタブで差し替える。

use crate::error::Error;

/// 単発の LLM 完了（プロンプト文字列 → 第一候補のテキスト）
pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}
