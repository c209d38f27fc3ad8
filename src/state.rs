//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。状态在启动时构建一次，此后只读。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::LlmService;

/// 应用共享状态
///
/// 使用 Arc 包裹以便在多个处理器之间安全共享
pub struct AppState {
    /// LLM 服务（启动时从配置构建一次，注入各处理器）
    pub llm: LlmService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: &AppConfig) -> Self {
        Self {
            llm: LlmService::new(config),
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: &AppConfig) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}
