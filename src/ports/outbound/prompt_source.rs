//! プロンプト入力の Outbound ポート
//!
//! STDIN からの 1 行読み取りと、対話端末かどうかの判定を抽象化する。
//! 端末判定があるため、パイプ必須の前提条件をテストから検証できる。

use crate::error::Error;

/// プロンプト入力源
pub trait PromptSource: Send + Sync {
    /// 入力が対話端末に接続されているか（パイプ・リダイレクトなら false）
    fn is_interactive(&self) -> bool;

    /// 1 行読み取る（末尾の改行は取り除く。EOF のときは空文字列）
    fn read_line(&self) -> Result<String, Error>;
}
