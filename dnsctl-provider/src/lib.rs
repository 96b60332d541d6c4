//! DNS 服务 Provider 适配库
//!
//! 提供 Provider 类型注册表、能力矩阵声明以及各 Provider 的初始化逻辑。
//! 注册表由调用方显式创建，并在启动时通过 [`register_all_providers`] 填充。

pub mod capabilities;
mod error;
pub mod platform;
pub mod providers;
mod registry;
mod traits;
mod types;

#[cfg(test)]
mod test_utils;

pub use capabilities::{Capability, CapabilityEntry, CapabilityMatrix};
pub use error::{ProviderError, Result};
pub use platform::{FixedPlatform, HostPlatform};
pub use providers::{NoopProvider, register_all_providers};
pub use registry::{DspFuncs, Initializer, ProviderRegistration, ProviderTypeRegistry, RecordAuditor};
pub use traits::{DnsServiceProvider, PlatformGate};
pub use types::{DnsRecordType, ProviderConfig, ProviderMetadata, RawMetadata, RecordConfig};
