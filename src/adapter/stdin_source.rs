//! 標準入力からのプロンプト読み取り実装

use crate::error::Error;
use crate::ports::outbound::PromptSource;
use std::io::{self, BufRead, IsTerminal};

/// 標準入力からの PromptSource 実装
#[derive(Debug, Clone, Default)]
pub struct StdinPromptSource;

impl PromptSource for StdinPromptSource {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_line(&self) -> Result<String, Error> {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read from stdin: {}", e)))?;
        // 末尾の改行（CRLF 含む）を取り除く。EOF のときは空のまま返す
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
