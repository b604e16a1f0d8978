//! LLM ドライバーの実装
//!
//! プロバイダに依存しない共通処理を提供します。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLM ドライバー
pub struct LlmDriver<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> LlmDriver<P> {
    /// 新しいドライバーを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// プロンプトを送信して第一候補のテキストを取得
    ///
    /// # Arguments
    /// * `prompt` - プロンプト文字列
    ///
    /// # Returns
    /// * `Ok(String)` - 第一候補の応答テキスト（trim しない。呼び出し側で行う）
    /// * `Err(Error)` - エラー
    pub fn complete(&self, prompt: &str) -> Result<String, Error> {
        // リクエストペイロードを生成
        let payload = self.provider.make_request_payload(prompt)?;

        // JSON 文字列に変換
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        // HTTP リクエストを実行
        let response_json = self.provider.make_http_request(&request_json)?;

        // レスポンスから第一候補のテキストを抽出
        let text = self
            .provider
            .parse_completion_text(&response_json)?
            .ok_or_else(|| Error::llm("No text in response"))?;

        Ok(text)
    }

    /// プロバイダを取得
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
