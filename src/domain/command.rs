//! CLI から組み立てるコマンド

use crate::domain::{ModelName, ProviderName};

/// recur が実行するコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum RecurCommand {
    /// ヘルプを表示して終了
    Help,
    /// 利用可能なプロバイダプロファイル一覧を表示
    ListProfiles,
    /// STDIN の 1 行目からチェーンを開始する（通常パス）
    Run {
        profile: Option<ProviderName>,
        model: Option<ModelName>,
    },
}
