//! Climbr 职业平台后端
//!
//! 使用 axum 框架构建的后端服务，提供职业路线图生成、求职材料生成和 PDF 导出功能。

use axum::http::HeaderValue;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::AppConfig;
use state::create_shared_state;

/// 允许跨域访问的本地开发前端地址
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5500", "http://127.0.0.1:5500"];

#[tokio::main]
async fn main() {
    // 加载 .env 文件（不存在则忽略）
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "climbr_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Climbr backend...");

    // 从环境变量读取配置（进程启动时只读取一次）
    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set, LLM endpoints will fail until it is configured");
    }

    // 创建共享状态
    let state = create_shared_state(&config);

    // 配置 CORS（仅允许本地开发前端，携带凭证时不能使用通配符）
    let origins: [HeaderValue; 2] = ALLOWED_ORIGINS.map(|origin| origin.parse().unwrap());
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&state)))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
