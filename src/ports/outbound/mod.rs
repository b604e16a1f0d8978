mod completion;
mod env_resolver;
mod fs;
mod log;
mod prompt_source;

pub use completion::Completion;
pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use prompt_source::PromptSource;
