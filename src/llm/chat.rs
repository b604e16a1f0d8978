//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! legacy completions のモデルは順次廃止されているため、現行エンドポイントや
//! ローカル互換サーバ（base_url 指定）でもチェーンを回せるようにする。
//! プロンプト 1 本を user メッセージとして送り、`choices[0].message.content` を取り出す。

use crate::error::Error;
use crate::llm::openai::{DEFAULT_API_KEY_ENV, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI Chat Completions 互換プロバイダ
pub struct ChatProvider {
    model: String,
    base_url: String,
    /// None のとき Authorization ヘッダを付けない（ローカルサーバ用）
    api_key: Option<String>,
    temperature: f64,
    max_tokens: u32,
}

impl ChatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき "gpt-4o-mini"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のときデフォルト URL では
    ///   OPENAI_API_KEY、base_url 上書き時は認証なし）
    /// * `temperature` - 温度（None のとき 0.0）
    /// * `max_tokens` - 最大トークン数（None のとき 2048）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key = match resolve_api_key_env(&base_url, api_key_env) {
            Some(env_name) => Some(env::var(&env_name).map_err(|_| {
                Error::env(format!("{} environment variable is not set", env_name))
            })?),
            None => None,
        };
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
        format!("{}/chat/completions", self.base_url)
    }
}

/// API キーを読む環境変数名を決める。
/// 既定の OpenAI エンドポイント宛ては認証必須なので OPENAI_API_KEY を既定とし、
/// base_url 上書き時（ローカル互換サーバ）は指定が無ければ認証なし。
fn resolve_api_key_env(base_url: &str, api_key_env: Option<String>) -> Option<String> {
    api_key_env.or_else(|| {
        if base_url == DEFAULT_BASE_URL {
            Some(DEFAULT_API_KEY_ENV.to_string())
        } else {
            None
        }
    })
}

impl LlmProvider for ChatProvider {
    fn name(&self) -> &str {
        "chat"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

        if let Some(ref key) = self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}
