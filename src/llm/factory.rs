//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::llm::chat::ChatProvider;
use crate::llm::echo::EchoProvider;
use crate::llm::openai::OpenAiProvider;
use crate::llm::provider::LlmProvider;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI legacy completions (/v1/completions)
    OpenAi,
    /// OpenAI Chat Completions 互換 (/chat/completions)
    Chat,
    /// Echo（固定の応答を返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" | "gpt" => Some(Self::OpenAi),
            "chat" | "openai_compat" => Some(Self::Chat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Chat => "chat",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダの enum ラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAi(OpenAiProvider),
    Chat(ChatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAi(p) => p.name(),
            Self::Chat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        match self {
            Self::OpenAi(p) => p.make_request_payload(prompt),
            Self::Chat(p) => p.make_request_payload(prompt),
            Self::Echo(p) => p.make_request_payload(prompt),
        }
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        match self {
            Self::OpenAi(p) => p.make_http_request(request_json),
            Self::Chat(p) => p.make_http_request(request_json),
            Self::Echo(p) => p.make_http_request(request_json),
        }
    }

    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        match self {
            Self::OpenAi(p) => p.parse_completion_text(response_json),
            Self::Chat(p) => p.parse_completion_text(response_json),
            Self::Echo(p) => p.parse_completion_text(response_json),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のとき各プロバイダのデフォルト）
/// * `base_url` - ベース URL（None のとき各プロバイダのデフォルト）
/// * `api_key_env` - API キーを読む環境変数名（None のとき各プロバイダのデフォルト）
/// * `temperature` - 温度（None のとき 0.0）
/// * `max_tokens` - 最大トークン数（None のとき 2048）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::OpenAi => {
            let provider =
                OpenAiProvider::new(model, base_url, api_key_env, temperature, max_tokens)?;
            Ok(AnyProvider::OpenAi(provider))
        }
        ProviderType::Chat => {
            let provider =
                ChatProvider::new(model, base_url, api_key_env, temperature, max_tokens)?;
            Ok(AnyProvider::Chat(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
