//! LLM プロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLM プロバイダのトレイト
///
/// 各プロバイダ（OpenAI completions、chat 互換など）はこのトレイトを実装する。
/// リクエスト生成・HTTP 実行・テキスト抽出を分離してあり、各段を単体でテストできる。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - プロンプト文字列
    ///
    /// # Returns
    /// * `Ok(Value)` - リクエスト JSON
    /// * `Err(Error)` - エラー
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTP リクエストを実行してレスポンスを取得
    ///
    /// # Arguments
    /// * `request_json` - リクエスト JSON 文字列
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンス JSON 文字列
    /// * `Err(Error)` - エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから第一候補のテキストを抽出
    ///
    /// # Arguments
    /// * `response_json` - レスポンス JSON 文字列
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合は None）
    /// * `Err(Error)` - エラー
    fn parse_completion_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
