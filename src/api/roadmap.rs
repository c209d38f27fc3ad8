//! 职业路线图端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::error::AppResult;
use crate::models::{Roadmap, RoadmapRequest, RoadmapResponse};
use crate::services::PromptService;
use crate::state::AppState;

/// 生成职业路线图
///
/// 将目标包装成固定提示词转发给补全提供方，原样返回补全文本。
async fn generate_roadmap(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RoadmapRequest>,
) -> AppResult<Json<RoadmapResponse>> {
    info!("Roadmap request: goal={}", req.goal);

    let messages = PromptService::new().build_roadmap_messages(&req.goal);
    let details = state.llm.chat_completion(messages).await?;

    Ok(Json(RoadmapResponse {
        success: true,
        roadmap: Roadmap {
            title: "AI Career Roadmap".to_string(),
            timeline: "24 months".to_string(),
            details,
        },
    }))
}

/// 创建路线图路由
pub fn roadmap_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/v1/roadmap/generate", post(generate_roadmap))
}
