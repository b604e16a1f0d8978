//! LLM ドライバーとプロバイダ
//!
//! 単発の completion 呼び出しのみを扱う（ストリーミング・tool call なし）。

pub mod chat;
pub mod config;
pub mod driver;
pub mod echo;
pub mod factory;
pub mod openai;
pub mod provider;
pub mod resolver;
