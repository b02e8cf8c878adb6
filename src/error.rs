//! 错误类型
//!
//! - `RequestError`: 单次文档请求失败，在提交边界统一折叠为固定提示文本
//! - `AppError`: 启动阶段（配置、日志、终端）的错误，由 main 返回

use std::io;
use std::path::PathBuf;

/// 文档请求失败的原因，只写入日志，不展示给用户
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RequestError::Status(status.as_u16())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

/// 应用级错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("无法获取用户{0}目录")]
    MissingDir(&'static str),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
