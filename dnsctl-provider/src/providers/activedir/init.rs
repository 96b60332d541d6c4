//! Active Directory Provider 初始化

use crate::error::{ProviderError, Result};
use crate::providers::NoopProvider;
use crate::traits::{DnsServiceProvider, PlatformGate};
use crate::types::{ProviderConfig, RawMetadata};

use super::{ActiveDirectoryConfig, ActiveDirectoryProvider, KEY_AD_SERVER, PROVIDER_NAME};

const DEPRECATION_NOTICE: &str = "ACTIVEDIRECTORY_PS provider is being replaced by MSDNS. Please convert.  Details in https://stackexchange.github.io/dnscontrol/providers/msdns";

const POWERSHELL_UNAVAILABLE: &str =
    "PowerShell not available. Active Directory will not be updated.";

/// 初始化结果：可用实例或占位实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Ready(ActiveDirectoryProvider),
    Noop(NoopProvider),
}

impl InitOutcome {
    pub fn into_provider(self) -> Box<dyn DnsServiceProvider> {
        match self {
            Self::Ready(provider) => Box::new(provider),
            Self::Noop(noop) => Box::new(noop),
        }
    }
}

/// 根据配置创建 Provider
///
/// 流程: 弃用提示 -> 解析 fakeps/路径 -> fake 直接返回 -> 平台检查 -> 读取 `ADServer`
///
/// 平台不可用且非 fake 时返回占位实例（不是错误），其余 Provider 照常工作。
/// `metadata` 目前不使用。
pub fn initialize(
    config: &ProviderConfig,
    _metadata: Option<&RawMetadata>,
    gate: &dyn PlatformGate,
) -> Result<InitOutcome> {
    log::warn!("{DEPRECATION_NOTICE}");

    let ActiveDirectoryConfig {
        fake,
        ps_out,
        ps_log,
    } = ActiveDirectoryConfig::from_config(config)?;

    if fake {
        log::debug!("[{PROVIDER_NAME}] fake mode, commands go to {ps_out}");
        return Ok(InitOutcome::Ready(ActiveDirectoryProvider {
            ad_server: String::new(),
            fake,
            ps_out,
            ps_log,
        }));
    }

    if gate.can_execute_management_tool() {
        let ad_server = config.get(KEY_AD_SERVER);
        if ad_server.is_empty() {
            return Err(ProviderError::MissingRequiredConfig {
                provider: PROVIDER_NAME.to_string(),
                key: KEY_AD_SERVER.to_string(),
            });
        }
        log::debug!("[{PROVIDER_NAME}] real mode against {ad_server}");
        return Ok(InitOutcome::Ready(ActiveDirectoryProvider {
            ad_server: ad_server.to_string(),
            fake,
            ps_out,
            ps_log,
        }));
    }

    log::warn!("{POWERSHELL_UNAVAILABLE}");
    Ok(InitOutcome::Noop(NoopProvider::new(
        PROVIDER_NAME,
        POWERSHELL_UNAVAILABLE,
    )))
}
