//! 日志初始化
//!
//! 终端被 UI 占用，日志写入数据目录下的文件。级别由 `RUST_LOG` 控制，默认 info。

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::error::AppError;

pub const LOG_FILE_NAME: &str = "docgen.log";

/// 初始化全局 tracing 订阅者，返回的 guard 需要保持到进程退出
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard, AppError> {
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}
