//! 単発 LLM 完了の標準実装（LlmDriver へ委譲）

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::factory::AnyProvider;
use crate::ports::outbound::Completion;

/// 標準の単発完了アダプタ
pub struct DriverCompletion {
    driver: LlmDriver<AnyProvider>,
}

impl DriverCompletion {
    pub fn new(driver: LlmDriver<AnyProvider>) -> Self {
        Self { driver }
    }
}

impl Completion for DriverCompletion {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        self.driver.complete(prompt)
    }
}
