//! 运行配置模块
//!
//! 浏览器中没有进程环境变量，配置在编译期通过 `option_env!` 注入，
//! 未定义时使用下列默认值。

use log::Level;
use ship_tracker_shared::DEFAULT_API_PREFIX;

const API_URL_VAR: Option<&str> = option_env!("SHIP_TRACKER_API_URL");
const LOG_LEVEL_VAR: Option<&str> = option_env!("SHIP_TRACKER_LOG_LEVEL");

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API 基础地址，不含末尾 `/`
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// 读取编译期注入的配置
    pub fn from_env() -> Self {
        Self::from_values(API_URL_VAR, LOG_LEVEL_VAR)
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_PREFIX);

        let log_level = log_level
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_api_prefix() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn trims_trailing_slash_and_parses_level() {
        let config = AppConfig::from_values(Some("https://ships.example.com/api/"), Some("warn"));
        assert_eq!(config.api_base_url, "https://ships.example.com/api");
        assert_eq!(config.log_level, Level::Warn);
    }

    #[test]
    fn blank_or_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
