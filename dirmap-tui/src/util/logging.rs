//! 日志初始化

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "DIRMAP_LOG";

/// 日志文件位置：`<data_local_dir>/dirmap/dirmap.log`
fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dirmap").join("dirmap.log"))
}

/// 构建过滤器：环境变量优先，其次是配置中的级别
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志，`log` 宏的记录经由 tracing-log 桥接写入文件
///
/// 返回日志文件路径；无法打开文件时返回 None，此时不记录日志。
pub fn init_logging(level: &str) -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(build_filter(level))
        .try_init()
        .ok()?;

    Some(path)
}
