//! 统一 LLM 客户端

use reqwest::Client;
use tracing::info;

use super::openai::complete_openai;
use super::types::{ChatMessage, LlmError};

/// 统一 LLM 客户端
///
/// 封装 reqwest 客户端与凭证，每次调用发起一次非流式补全请求。
/// 不设置请求超时，提供方的延迟会直接传递给调用端。
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 发起一次聊天补全，返回第一个 choice 的消息内容
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
    ) -> Result<String, LlmError> {
        info!("LLM request: model={}, messages={}", model, messages.len());

        complete_openai(&self.client, &self.api_key, &self.base_url, messages, model).await
    }
}
