//! Active Directory 配置解析

use crate::error::{ProviderError, Result};
use crate::types::ProviderConfig;

use super::{DEFAULT_PS_LOG, DEFAULT_PS_OUT, KEY_FAKE_PS, KEY_PS_LOG, KEY_PS_OUT, PROVIDER_NAME};

/// 与平台无关的配置部分
///
/// `ADServer` 只在真实模式且平台可用时才需要，由初始化流程单独读取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDirectoryConfig {
    pub fake: bool,
    pub ps_out: String,
    pub ps_log: String,
}

impl ActiveDirectoryConfig {
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let fake = parse_fakeps(config.get(KEY_FAKE_PS))?;

        Ok(Self {
            fake,
            ps_out: or_default(config.get(KEY_PS_OUT), DEFAULT_PS_OUT),
            ps_log: or_default(config.get(KEY_PS_LOG), DEFAULT_PS_LOG),
        })
    }
}

fn parse_fakeps(value: &str) -> Result<bool> {
    match value {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        other => Err(ProviderError::InvalidConfigValue {
            provider: PROVIDER_NAME.to_string(),
            key: KEY_FAKE_PS.to_string(),
            value: other.to_string(),
            expected: "'true' or 'false'".to_string(),
        }),
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
