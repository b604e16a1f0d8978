//! エラーハンドリング
//!
//! 全レイヤーで共有するエラー型。メッセージと sysexits 系の終了コードを対応付ける。

/// エラー型
///
/// 終了コードの対応:
/// * 64 - 引数不正・使い方の誤り（`InvalidArgument` / `Env`）
/// * 70 - 内部エラー（`System`）
/// * 74 - I/O・HTTP・JSON・LLM 応答のエラー（`Io` / `Http` / `Json` / `Llm`）
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Env(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Llm(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー（usage 扱い）
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// 環境変数未設定などの環境エラー
    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// HTTP リクエスト・レスポンスのエラー
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSON のシリアライズ・パースのエラー
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// LLM 応答の内容不備（テキスト欠落など）
    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    /// 内部エラー
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::System(_) => 70,
            Self::Io(_) | Self::Http(_) | Self::Json(_) | Self::Llm(_) => 74,
        }
    }

    /// 使い方の誤りかどうか（main で usage 表示の判断に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_is_usage() {
        let err = Error::invalid_argument("bad flag");
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
        assert_eq!(err.to_string(), "bad flag");
    }

    #[test]
    fn test_env_is_not_usage() {
        let err = Error::env("OPENAI_API_KEY environment variable is not set");
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_io_http_json_llm_exit_codes() {
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::http("x").exit_code(), 74);
        assert_eq!(Error::json("x").exit_code(), 74);
        assert_eq!(Error::llm("x").exit_code(), 74);
    }

    #[test]
    fn test_system_exit_code() {
        assert_eq!(Error::system("x").exit_code(), 70);
    }
}
