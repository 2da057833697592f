//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 主题
    pub theme: Theme,
    /// 界面语言（BCP 47）
    pub language: String,
    /// 设施生成种子；为空时每次启动随机
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// 事件轮询间隔（毫秒）
    pub tick_rate_ms: u64,
    /// 默认日志级别（可被 `OVERCLOCK_LOG` 覆盖）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            seed: None,
            tick_rate_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径 `<config_dir>/overclock/config.json`
    pub fn new() -> Self {
        let dir = dirs::config_dir().map_or_else(|| PathBuf::from("."), |d| d.join("overclock"));
        Self::with_path(dir.join(CONFIG_FILE))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 配置文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_under_app_dir() {
        let service = LocalConfigService::new();
        assert!(service.path().ends_with(CONFIG_FILE));
        let parent = service.path().parent().and_then(|p| p.file_name());
        assert!(parent.is_none() || parent == Some("overclock".as_ref()));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            seed: Some(7),
            tick_rate_ms: 50,
            log_level: "debug".to_string(),
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light", "seed": 42 }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.language, "en-US");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("invalid config file"));
    }
}
