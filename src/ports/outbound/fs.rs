//! ファイルシステム Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみファイルにアクセスする。

use crate::error::Error;
use std::io::Write;
use std::path::Path;

/// ファイルシステム抽象
pub trait FileSystem: Send + Sync {
    /// パスが存在するか
    fn exists(&self, path: &Path) -> bool;

    /// ファイル全体を文字列として読む
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;

    /// ディレクトリを再帰的に作成する（既に存在しても成功）
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;

    /// 追記モードでファイルを開く（無ければ作成）
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
}
