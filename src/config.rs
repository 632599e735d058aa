//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 涨停板接口地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API 配置
    #[serde(default)]
    pub api: ApiConfig,
}

// 默认值函数
fn default_base_url() -> String { "https://api.example.com/stocks/limitup".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值
    pub fn load() -> Self {
        let config_paths = ["config.json", "config/config.json"];

        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        log::info!("从 {} 加载配置成功", path);
                        return config;
                    }
                    Err(e) => {
                        log::warn!("加载配置文件 {} 失败: {}", path, e);
                    }
                }
            }
        }

        log::debug!("使用默认配置");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试默认配置取值
    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://api.example.com/stocks/limitup");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.connect_timeout_secs, 10);
    }

    /// 测试从 JSON 加载时未指定的字段回退到默认值
    #[test]
    fn test_partial_config_falls_back() {
        let json = r#"{ "api": { "base_url": "http://127.0.0.1:8080/limitup" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8080/limitup");
        assert_eq!(config.api.timeout_secs, 30);
    }
}
