//! OpenAI Chat Completions API 非流式实现

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::format::build_openai_endpoint;
use super::types::{ChatMessage, LlmError};

/// OpenAI 请求载荷
#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// OpenAI 响应体
#[derive(Deserialize, Debug)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize, Debug)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize, Debug)]
struct OpenAiResponseMessage {
    content: String,
}

/// 调用 OpenAI API 并返回第一个 choice 的消息内容
pub async fn complete_openai(
    client: &Client,
    api_key: &str,
    base_url: &str,
    messages: Vec<ChatMessage>,
    model: &str,
) -> Result<String, LlmError> {
    let endpoint = build_openai_endpoint(base_url);

    // 构建请求体
    let payload = OpenAiRequest {
        model: model.to_string(),
        messages,
    };

    debug!("OpenAI API request: endpoint={}, model={}", endpoint, model);

    // 发送请求
    let response = client
        .post(&endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    // 检查状态码
    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_text = response.text().await.unwrap_or_default();
        error!(
            "OpenAI API error: status={}, body={}",
            status_code,
            &error_text[..error_text.len().min(500)]
        );
        return Err(LlmError::ApiError {
            status: status_code,
            message: error_text,
        });
    }

    // 解析响应，取第一个 choice
    let body: OpenAiResponse = response.json().await?;
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)
}
