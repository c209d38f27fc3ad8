//! Prompt 构建服务
//!
//! 负责构建两个 LLM 端点的系统角色与用户提示词。

use crate::llm::ChatMessage;

/// 路线图端点的系统角色
const ROADMAP_SYSTEM_PROMPT: &str = "You are a career mentor.";

/// 求职材料端点的系统角色
const APPLICATION_SYSTEM_PROMPT: &str = "You are a career assistant.";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建职业路线图消息列表
    pub fn build_roadmap_messages(&self, goal: &str) -> Vec<ChatMessage> {
        let prompt = format!(
            "Create a career roadmap for: {}.\n\
             Split into 4 phases (6 months each).\n\
             Each phase should include skills + one project.",
            goal
        );

        vec![
            ChatMessage::system(ROADMAP_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ]
    }

    /// 构建求职材料消息列表
    pub fn build_application_messages(&self, job_description: &str) -> Vec<ChatMessage> {
        let prompt = format!(
            "Given this job description:\n{}\n\n\
             Generate:\n\
             1. Tailored resume summary (skills and experience).\n\
             2. A professional cover letter.\n\
             Label sections clearly.",
            job_description
        );

        vec![
            ChatMessage::system(APPLICATION_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ]
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
