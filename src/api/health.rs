//! 存活检查端点

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use std::sync::Arc;

/// 根路径存活检查处理器
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Climbr API running 🚀"
    }))
}

/// 创建存活检查路由
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(root))
}
