//! Echo プロバイダの実装
//!
//! このプロバイダは実際に LLM API を呼び出さず、固定の応答を返すだけです。
//! デバッグやテスト用に使用します。応答はマーカー接頭辞で始まらないため、
//! チェーンは必ず 1 回で止まります。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

/// Echo プロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しい Echo プロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({ "prompt": prompt }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        // 実際の API 呼び出しは行わず、リクエストをそのまま包んで返す
        let v: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        let prompt = v["prompt"].as_str().unwrap_or("");
        Ok(json!({ "echo": prompt }).to_string())
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;
        let prompt = v["echo"].as_str().unwrap_or("");
        Ok(Some(format!(
            "[echo] received {} chars (no completion call made)",
            prompt.chars().count()
        )))
    }
}
