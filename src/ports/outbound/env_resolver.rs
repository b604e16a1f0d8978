//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・設定ファイル・ログファイルのパスを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. RECUR_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/recur（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/recur
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス
    /// RECUR_HOME があれば $RECUR_HOME/config/profiles.json、なければ resolve_home_dir() 直下の profiles.json
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error>;

    /// JSONL ログファイルのパス（resolve_home_dir()/log/recur.jsonl）
    fn resolve_log_path(&self) -> Result<PathBuf, Error>;
}
