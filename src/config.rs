use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 默认的文档生成服务地址
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/generate-doc";

/// 配置文件结构 (~/.config/docgen/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// 请求超时（秒），缺省不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir().ok_or(AppError::MissingDir("配置"))?;
    Ok(dir.join("docgen").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
