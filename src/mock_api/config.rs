//! Mock API 設定管理

use crate::mock_api::types::LabelSet;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;
use std::time::Duration;

/// 設定檔名稱（相對於工作目錄）
pub const MOCK_CONFIG_PATH: &str = "mock_server_config.json";

/// 伺服器設定，啟動後不再變動
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MockServerConfig {
    /// 綁定位址 (預設 0.0.0.0)
    pub host: String,
    /// 監聽埠號 (預設 3001)
    pub port: u16,
    /// multipart 上傳欄位名稱
    pub upload_field: String,
    /// 回傳的標籤集合
    pub labels: LabelSet,
    /// 模擬推論延遲（毫秒，0 表示不延遲）
    pub delay_ms: u64,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            upload_field: "audio".to_string(),
            labels: LabelSet::TitleCase,
            delay_ms: 0,
        }
    }
}

impl MockServerConfig {
    /// 瀏覽器前端使用的版本：大寫標籤、2 秒延遲、欄位名稱 `file`
    pub fn live_frontend() -> Self {
        Self {
            upload_field: "file".to_string(),
            labels: LabelSet::UpperCase,
            delay_ms: 2000,
            ..Self::default()
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 設定讀取錯誤
#[derive(Debug)]
pub enum ConfigError {
    /// 檔案讀取錯誤
    Io(io::Error),
    /// JSON 解析錯誤
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config read error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// 從 JSON 檔讀取設定，未指定的欄位使用預設值
pub fn load_config_file(path: &Path) -> Result<MockServerConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// 讀取設定，若不存在或無法解析則使用預設值
pub fn get_mock_config(path: &Path) -> MockServerConfig {
    match load_config_file(path) {
        Ok(config) => {
            log::info!("Loaded mock server config from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No config file at {}, using defaults", path.display());
            MockServerConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring config file {}: {}", path.display(), e);
            MockServerConfig::default()
        }
    }
}
