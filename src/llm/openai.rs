//! OpenAI legacy completions (/v1/completions) プロバイダ
//!
//! このツールがもともと相手にしていたエンドポイント。prompt 1 本を送り、
//! `choices[0].text` を第一候補として取り出す。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "text-davinci-003";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 決定的サンプリング（温度 0）
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
/// 応答の最大トークン数
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// OpenAI completions プロバイダ
///
/// API キーは構築時に環境変数から 1 度だけ読み、値として保持する（グローバルにしない）。
pub struct OpenAiProvider {
    model: String,
    base_url: String,
    api_key: String,
    temperature: f64,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき "text-davinci-003"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき OPENAI_API_KEY）
    /// * `temperature` - 温度（None のとき 0.0）
    /// * `max_tokens` - 最大トークン数（None のとき 2048）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<Self, Error> {
        let env_name = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = env::var(&env_name)
            .map_err(|_| Error::env(format!("{} environment variable is not set", env_name)))?;
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let temperature = temperature.map(f64::from).unwrap_or(DEFAULT_TEMPERATURE);
        let max_tokens = max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);

        Ok(Self {
            model,
            base_url,
            api_key,
            temperature,
            max_tokens,
        })
    }

    fn url(&self) -> String {
        format!("{}/completions", self.base_url)
    }
}

impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model,
            "prompt": prompt,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("OpenAI API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("OpenAI API error: {}", error_msg)));
        }

        let text = v["choices"][0]["text"].as_str().map(|s| s.to_string());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> OpenAiProvider {
        // API キーなしでもペイロード生成・パースはテストできる
        OpenAiProvider {
            model: "text-davinci-003".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "test-key".to_string(),
            temperature: 0.0,
            max_tokens: 2048,
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(test_provider().name(), "openai");
    }

    #[test]
    fn test_make_request_payload() {
        let provider = test_provider();
        let payload = provider
            .make_request_payload("You are a recursive function")
            .unwrap();
        assert_eq!(payload["model"], "text-davinci-003");
        assert_eq!(payload["prompt"], "You are a recursive function");
        assert_eq!(payload["temperature"], 0.0);
        assert_eq!(payload["max_tokens"], 2048);
    }

    #[test]
    fn test_parse_completion_text() {
        let provider = test_provider();
        let response = r#"{"choices":[{"text":"\n\nYou are a recursive function that counts."}]}"#;
        let text = provider.parse_completion_text(response).unwrap();
        assert_eq!(
            text.as_deref(),
            Some("\n\nYou are a recursive function that counts.")
        );
    }

    #[test]
    fn test_parse_completion_text_only_first_choice() {
        let provider = test_provider();
        let response = r#"{"choices":[{"text":"first"},{"text":"second"}]}"#;
        let text = provider.parse_completion_text(response).unwrap();
        assert_eq!(text.as_deref(), Some("first"));
    }

    #[test]
    fn test_parse_completion_text_missing() {
        let provider = test_provider();
        let text = provider.parse_completion_text(r#"{"choices":[]}"#).unwrap();
        assert!(text.is_none());
    }

    #[test]
    fn test_parse_completion_text_api_error() {
        let provider = test_provider();
        let response = r#"{"error":{"message":"Rate limit exceeded"}}"#;
        let err = provider.parse_completion_text(response).unwrap_err();
        assert!(err.to_string().contains("Rate limit exceeded"));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_parse_completion_text_invalid_json() {
        let provider = test_provider();
        let err = provider.parse_completion_text("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse response JSON"));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let provider = OpenAiProvider {
            model: "m".to_string(),
            base_url: "https://example.com/v1".to_string(),
            api_key: "k".to_string(),
            temperature: 0.0,
            max_tokens: 16,
        };
        assert_eq!(provider.url(), "https://example.com/v1/completions");
    }
}
