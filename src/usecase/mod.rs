pub mod recursive_prompt;

pub use recursive_prompt::{RecursivePromptUseCase, STDIN_REQUIRED_MSG};
