//! 应用配置管理
//!
//! 启动时从环境变量读取一次配置，之后通过共享状态注入各处理器，不使用全局单例。

use std::env;

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_port() -> u16 {
    8000
}

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// LLM API 密钥
    pub api_key: String,

    /// LLM API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// 服务监听端口
    pub port: u16,
}

impl AppConfig {
    /// 从环境变量加载配置
    ///
    /// API 密钥缺失不会导致启动失败，首次调用 LLM 时才会报错。
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| default_base_url()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.port, 8000);
    }
}
