mod driver_completion;
mod file_json_log;
mod std_env_resolver;
mod std_fs;
mod stdin_source;

pub use driver_completion::DriverCompletion;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stdin_source::StdinPromptSource;
