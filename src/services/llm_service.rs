//! LLM 服务封装
//!
//! 封装 LlmClient 与模型配置，在启动时构建一次并放入共享状态。

use crate::config::AppConfig;
use crate::llm::{ChatMessage, LlmClient, LlmError};

/// LLM 服务
pub struct LlmService {
    client: Option<LlmClient>,
    model: String,
}

impl LlmService {
    /// 从配置创建 LLM 服务
    ///
    /// API 密钥为空时客户端为 None，调用时才返回配置错误。
    pub fn new(config: &AppConfig) -> Self {
        let client = if config.api_key.is_empty() {
            None
        } else {
            LlmClient::new(&config.api_key, &config.base_url).ok()
        };

        Self {
            client,
            model: config.model.clone(),
        }
    }

    /// 发起一次聊天补全
    pub async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let client = self.client.as_ref().ok_or_else(|| {
            LlmError::ConfigError("OPENAI_API_KEY is not configured".to_string())
        })?;

        client.chat_completion(messages, &self.model).await
    }
}
