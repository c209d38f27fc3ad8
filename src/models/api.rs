//! REST API 请求/响应模型
//!
//! 所有实体都是单次请求内构建并消费的临时载荷，没有持久化身份。

use serde::{Deserialize, Serialize};

/// 路线图生成请求
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub goal: String,
}

/// 路线图生成响应
#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub success: bool,
    pub roadmap: Roadmap,
}

/// 生成的职业路线图
#[derive(Debug, Serialize)]
pub struct Roadmap {
    pub title: String,
    pub timeline: String,
    /// 原始补全文本
    pub details: String,
}

/// 求职材料生成请求
#[derive(Debug, Deserialize)]
pub struct ApplicationRequest {
    /// base64 编码的简历文件（解码后暂不参与生成）
    pub resume_file: String,
    pub job_description: String,
}

/// 求职材料生成响应
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub success: bool,
    pub application: GeneratedApplication,
}

/// 生成的求职材料
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedApplication {
    pub resume: String,
    pub cover_letter: String,
    pub match_score: u32,
}

/// 专注会话（仅回显，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSession {
    /// 时长（秒）
    pub duration: u32,
    #[serde(default)]
    pub notes: String,
}

/// 专注会话保存响应
#[derive(Debug, Serialize)]
pub struct FocusSessionResponse {
    pub success: bool,
    pub saved: FocusSession,
}

fn default_resume_text() -> String {
    "Generated Resume".to_string()
}

fn default_cover_letter_text() -> String {
    "Generated Cover Letter".to_string()
}

/// PDF 下载查询参数
#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(default = "default_resume_text")]
    pub resume: String,
    #[serde(default = "default_cover_letter_text")]
    pub cover_letter: String,
}
