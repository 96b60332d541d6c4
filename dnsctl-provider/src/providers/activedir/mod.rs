//! Active Directory (`PowerShell`) DNS Provider
//!
//! 通过 Windows 上的 `PowerShell` DnsServer 模块管理 AD 集成 DNS。
//! fake 模式下只生成命令脚本，不接触任何真实基础设施。
//!
//! 该 Provider 已被 MSDNS 取代，每次初始化都会给出弃用提示。

mod audit;
mod config;
mod init;
mod provider;

use std::sync::Arc;

use crate::capabilities::{Capability, CapabilityEntry, CapabilityMatrix};
use crate::registry::{DspFuncs, ProviderRegistration};
use crate::traits::PlatformGate;
use crate::types::{ProviderConfig, RawMetadata};

pub use audit::audit_records;
pub use config::ActiveDirectoryConfig;
pub use init::{InitOutcome, initialize};

/// 注册名
pub const PROVIDER_NAME: &str = "ACTIVEDIRECTORY_PS";

pub(crate) const KEY_FAKE_PS: &str = "fakeps";
pub(crate) const KEY_PS_OUT: &str = "psout";
pub(crate) const KEY_PS_LOG: &str = "pslog";
pub(crate) const KEY_AD_SERVER: &str = "ADServer";

/// 默认命令脚本输出路径
pub const DEFAULT_PS_OUT: &str = "dns_update_commands.ps1";
/// 默认 `PowerShell` 日志路径
pub const DEFAULT_PS_LOG: &str = "powershell.log";

/// 能力矩阵
pub const FEATURES: CapabilityMatrix = CapabilityMatrix::new(&[
    (Capability::CanGetZones, CapabilityEntry::Unimplemented),
    (Capability::CanUseAlias, CapabilityEntry::cannot()),
    (Capability::CanUseCaa, CapabilityEntry::cannot()),
    (Capability::CanUsePtr, CapabilityEntry::cannot()),
    (Capability::CanUseSrv, CapabilityEntry::cannot()),
    (
        Capability::DocCreateDomains,
        CapabilityEntry::cannot_because("AD depends on the zone already existing on the dns server"),
    ),
    (
        Capability::DocDualHost,
        CapabilityEntry::cannot_because(
            "This driver does not manage NS records, so should not be used for dual-host scenarios",
        ),
    ),
    (Capability::DocOfficiallySupported, CapabilityEntry::Supported),
]);

/// 能力矩阵访问器
pub fn features() -> CapabilityMatrix {
    FEATURES
}

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    /// 只生成脚本
    Fake,
    /// 对 `ad_server` 执行命令
    Real,
}

/// Active Directory DNS Provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDirectoryProvider {
    pub(crate) ad_server: String,
    pub(crate) fake: bool,
    pub(crate) ps_out: String,
    pub(crate) ps_log: String,
}

impl ActiveDirectoryProvider {
    /// fake 模式下为空
    pub fn ad_server(&self) -> &str {
        &self.ad_server
    }

    pub fn is_fake(&self) -> bool {
        self.fake
    }

    pub fn ps_out(&self) -> &str {
        &self.ps_out
    }

    pub fn ps_log(&self) -> &str {
        &self.ps_log
    }

    pub fn mode(&self) -> ProviderMode {
        if self.fake {
            ProviderMode::Fake
        } else {
            ProviderMode::Real
        }
    }
}

/// 构造注册信息，初始化函数持有传入的平台检查
pub fn registration(gate: Arc<dyn PlatformGate>) -> ProviderRegistration {
    ProviderRegistration {
        name: PROVIDER_NAME,
        funcs: DspFuncs {
            initializer: Box::new(
                move |config: &ProviderConfig, metadata: Option<&RawMetadata>| {
                    initialize(config, metadata, gate.as_ref()).map(InitOutcome::into_provider)
                },
            ),
            record_auditor: audit_records,
        },
        capabilities: FEATURES,
    }
}
