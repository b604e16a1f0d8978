//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use crate::adapter::{
    DriverCompletion, FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem, StdinPromptSource,
};
use crate::domain::{ModelName, ProviderName};
use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::factory::{create_provider, ProviderType};
use crate::llm::resolver::{load_profiles_config, resolve_provider};
use crate::ports::outbound::{
    now_iso8601, Completion, EnvResolver, FileSystem, Log, LogLevel, LogRecord, PromptSource,
};

/// 標準アダプタ一式
pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub fs: Arc<dyn FileSystem>,
    pub prompt_source: Arc<dyn PromptSource>,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// ホームディレクトリが解決できない環境ではログを NoopLog にフォールバックする
/// （ログが取れないことは実行の失敗にしない）。
pub fn wire() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger: Arc<dyn Log> = match env_resolver.resolve_log_path() {
        Ok(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        Err(_) => Arc::new(NoopLog),
    };
    let prompt_source: Arc<dyn PromptSource> = Arc::new(StdinPromptSource);
    App {
        env_resolver,
        fs,
        prompt_source,
        logger,
    }
}

/// profiles.json と CLI オプションから Completion アダプタを組み立てる
///
/// モデル名は CLI 指定がプロファイルの値より優先。
pub fn build_completion(
    app: &App,
    profile: Option<&ProviderName>,
    model: Option<&ModelName>,
) -> Result<Arc<dyn Completion>, Error> {
    let cfg = load_profiles_config(app.fs.as_ref(), app.env_resolver.as_ref())?;
    let resolved = resolve_provider(profile, cfg.as_ref())?;
    let model = model.map(|m| m.as_str().to_string()).or(resolved.model);
    // echo はモデル指定を使わないため、指定されていたら警告レコードだけ残して続行する
    if model.is_some() && resolved.provider_type == ProviderType::Echo {
        let _ = app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: format!(
                "model is ignored by provider profile '{}'",
                resolved.profile_name
            ),
            layer: Some("wiring".to_string()),
            kind: Some("config".to_string()),
            fields: None,
        });
    }
    let provider = create_provider(
        resolved.provider_type,
        model,
        resolved.base_url,
        resolved.api_key_env,
        resolved.temperature,
        resolved.max_tokens,
    )?;
    Ok(Arc::new(DriverCompletion::new(LlmDriver::new(provider))))
}
