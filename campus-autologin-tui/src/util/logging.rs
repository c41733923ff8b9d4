//! 文件日志初始化

use anyhow::{Context, Result};
use campus_autologin_app::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "campus-autologin.log";

/// 初始化日志，返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(build_env_filter(&config.log.level))
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
