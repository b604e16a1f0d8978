//! Inbound ポート
//!
//! main（CLI）から UseCase を起動する入口。

use crate::cli::Config;
use crate::error::Error;

/// 解析済み Config を受け取り、終了コードを返す Runner
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
