//! 再帰プロンプトの UseCase
//!
//! STDIN の 1 行目から始め、テキストがマーカー接頭辞で始まる間だけ
//! completion を呼び、応答を次のプロンプトとして回す。
//! 呼び出しチェーンが長くなっても良いよう自己再帰ではなく明示的なループで表現する。

use crate::domain::continues_chain;
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, Completion, Log, LogLevel, LogRecord, PromptSource};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

/// パイプ入力が無いときの固定メッセージ
pub const STDIN_REQUIRED_MSG: &str = "You must pass a prompt string via STDIN.";

/// 再帰プロンプト UseCase
pub struct RecursivePromptUseCase {
    completion: Arc<dyn Completion>,
    log: Arc<dyn Log>,
    /// -v / --verbose: 各 completion 呼び出しを debug レコードとしてログに残す
    verbose: bool,
}

impl RecursivePromptUseCase {
    pub fn new(completion: Arc<dyn Completion>, log: Arc<dyn Log>, verbose: bool) -> Self {
        Self {
            completion,
            log,
            verbose,
        }
    }

    /// チェーンを実行する
    ///
    /// # Arguments
    /// * `source` - プロンプト入力源（対話端末ならエラー）
    /// * `out` - 応答行の出力先（通常は stdout）
    ///
    /// # Returns
    /// * `Ok(0)` - チェーン終了（0 回の場合を含む）
    /// * `Err(Error)` - 入力が対話端末、または completion 呼び出しの失敗
    pub fn run(&self, source: &dyn PromptSource, out: &mut dyn Write) -> Result<i32, Error> {
        if source.is_interactive() {
            return Err(Error::invalid_argument(STDIN_REQUIRED_MSG));
        }

        let mut text = source.read_line()?;
        let mut n: u32 = 1;

        while continues_chain(&text) {
            let response = self.completion.complete(&text)?;
            text = response.trim().to_string();
            writeln!(out, "response #{}: {}\n", n, text)
                .map_err(|e| Error::io_msg(e.to_string()))?;
            if self.verbose {
                let _ = self.log.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Debug,
                    message: "completion call".to_string(),
                    layer: Some("usecase".to_string()),
                    kind: Some("completion".to_string()),
                    fields: {
                        let mut m = BTreeMap::new();
                        m.insert("iteration".to_string(), serde_json::json!(n));
                        m.insert(
                            "response_chars".to_string(),
                            serde_json::json!(text.chars().count()),
                        );
                        Some(m)
                    },
                });
            }
            n += 1;
        }

        Ok(0)
    }
}
