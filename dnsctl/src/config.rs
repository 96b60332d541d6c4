//! 配置加载
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [providers.ad]
//! type = "ACTIVEDIRECTORY_PS"
//! domains = ["corp.example.com"]
//! metadata = '{"dns": "internal"}'
//!
//! [providers.ad.settings]
//! fakeps = "true"
//! psout = "out/commands.ps1"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dnsctl_provider::{ProviderConfig, RawMetadata};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// 默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "dnsctl.toml";
/// 指定配置文件的环境变量
pub const CONFIG_ENV: &str = "DNSCTL_CONFIG";

/// 应用配置
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    /// 以实例名为键
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderEntry>,
}

/// 日志配置
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// 单个 Provider 实例配置
#[derive(Debug, Deserialize)]
pub struct ProviderEntry {
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(default)]
    pub settings: ProviderConfig,
    /// 原样传给 Provider 的 JSON
    #[serde(default)]
    pub metadata: Option<String>,
    /// 初始化后查询 NS 的域名
    #[serde(default)]
    pub domains: Vec<String>,
}

impl ProviderEntry {
    pub fn raw_metadata(&self, name: &str) -> AppResult<Option<Box<RawMetadata>>> {
        self.metadata
            .as_ref()
            .map(|raw| {
                RawMetadata::from_string(raw.clone()).map_err(|source| AppError::InvalidMetadata {
                    name: name.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

impl AppConfig {
    /// 从文件加载配置
    ///
    /// 只有隐式的默认文件允许不存在（此时使用默认配置）；
    /// 通过参数或环境变量指定的文件必须可读。
    pub fn load(location: &ConfigLocation) -> AppResult<Self> {
        let path = location.path.as_path();
        if !location.explicit && !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)?;
        for (name, entry) in &config.providers {
            entry.raw_metadata(name)?;
        }
        Ok(config)
    }
}

/// 配置文件位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// 是否由命令行参数或环境变量指定
    pub explicit: bool,
}

impl ConfigLocation {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn implicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: false,
        }
    }
}

/// 配置文件路径：命令行参数 > 环境变量 > 默认值
pub fn resolve_config_path(arg: Option<&str>) -> ConfigLocation {
    arg.map(ConfigLocation::explicit)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(ConfigLocation::explicit))
        .unwrap_or_else(|| ConfigLocation::implicit(DEFAULT_CONFIG_FILE))
}
