//! ドメイン型
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

mod command;
mod dirs;
mod names;
mod prompt;

pub use command::RecurCommand;
pub use dirs::HomeDir;
pub use names::{ModelName, ProviderName};
pub use prompt::{continues_chain, MARKER_PREFIX};
