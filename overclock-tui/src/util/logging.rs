//! 日志初始化
//!
//! TUI 占用了 stdout / 备用屏幕，日志只能写入文件。
//! 核心库通过 `log` 门面输出，订阅器默认启用的 `tracing-log` 桥接会一并收集。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::AppConfig;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "OVERCLOCK_LOG";

/// 日志文件名
const LOG_FILE: &str = "overclock.log";

/// 日志目录：`<data_dir>/overclock/logs`，取不到数据目录时退回当前目录下的 `logs`
pub fn log_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("logs"),
        |d| d.join("overclock").join("logs"),
    )
}

/// 构造过滤器：环境变量优先，其次使用配置中的级别
pub fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// 安装全局订阅器
///
/// 返回的 `WorkerGuard` 必须存活到程序结束，否则缓冲中的日志会丢失。
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Logging to {}", dir.join(LOG_FILE).display());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_ends_in_logs() {
        assert!(log_dir().ends_with("logs"));
    }

    #[test]
    fn filter_falls_back_to_config_level() {
        std::env::remove_var(LOG_ENV);
        let config = AppConfig {
            log_level: "debug".into(),
            ..AppConfig::default()
        };
        assert_eq!(build_filter(&config).to_string(), "debug");
    }
}
