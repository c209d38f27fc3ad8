//! 专注会话端点（仅回显，不持久化）

use axum::{routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::models::{FocusSession, FocusSessionResponse};
use crate::state::AppState;

/// 记录专注会话
///
/// 确定性回显：校验通过的输入原样返回，不做任何存储。
async fn save_focus_session(Json(session): Json<FocusSession>) -> Json<FocusSessionResponse> {
    info!("Focus session logged: duration={}s", session.duration);

    Json(FocusSessionResponse {
        success: true,
        saved: session,
    })
}

/// 创建专注会话路由
pub fn focus_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/v1/focus/sessions", post(save_focus_session))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_focus_session_echoes_input() {
        let session = FocusSession {
            duration: 25,
            notes: "deep work".to_string(),
        };

        let Json(response) = save_focus_session(Json(session.clone())).await;

        assert!(response.success);
        assert_eq!(response.saved, session);
    }
}
