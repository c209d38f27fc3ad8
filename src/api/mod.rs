//! API 路由模块

mod analytics;
mod applications;
mod focus;
mod health;
mod roadmap;

pub use analytics::analytics_routes;
pub use applications::applications_routes;
pub use focus::focus_routes;
pub use health::health_routes;
pub use roadmap::roadmap_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(roadmap_routes())
        .merge(applications_routes())
        .merge(focus_routes())
        .merge(analytics_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::state::create_shared_state;

    /// 构建测试路由（空密钥配置，不会触发网络调用）
    fn test_router() -> Router {
        let config = AppConfig::default();
        create_api_routes(create_shared_state(&config))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Climbr API running 🚀");
    }

    #[tokio::test]
    async fn test_dashboard_is_constant_across_calls() {
        let request = || {
            Request::builder()
                .uri("/api/v1/analytics/dashboard")
                .body(Body::empty())
                .unwrap()
        };

        let first = body_json(test_router().oneshot(request()).await.unwrap()).await;
        let second = body_json(test_router().oneshot(request()).await.unwrap()).await;

        assert_eq!(first, second);
        assert_eq!(first["success"], true);
        assert_eq!(first["stats"]["goals"], 3);
        assert_eq!(first["stats"]["applications"], 5);
        assert_eq!(first["stats"]["focus_hours"], 18);
    }

    #[tokio::test]
    async fn test_focus_session_roundtrip() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/focus/sessions")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"duration": 25, "notes": "deep work"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["saved"]["duration"], 25);
        assert_eq!(body["saved"]["notes"], "deep work");
    }

    #[tokio::test]
    async fn test_download_returns_pdf_attachment() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/applications/download?resume=Hello&cover_letter=World")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=application.pdf"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_download_uses_default_texts() {
        // 不带查询参数时使用默认文本，仍应产出合法 PDF
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/applications/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
