//! 分析面板端点（静态数据）

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use std::sync::Arc;

/// 面板统计处理器
///
/// 确定性常量：尚无真实统计来源，数值为展示占位。
async fn dashboard() -> Json<Value> {
    Json(json!({
        "success": true,
        "stats": {
            "goals": 3,
            "applications": 5,
            "focus_hours": 18,
            "insights": "🔥 Keep up the momentum! Try networking this week."
        }
    }))
}

/// 创建分析面板路由
pub fn analytics_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/v1/analytics/dashboard", get(dashboard))
}
