//! Provider 实现

#[cfg(feature = "activedir")]
pub mod activedir;
mod none;

use std::sync::Arc;

use crate::error::Result;
use crate::registry::ProviderTypeRegistry;
use crate::traits::PlatformGate;

pub use none::NoopProvider;

/// 向注册表登记所有已启用的 Provider 类型
///
/// 应在启动时调用一次，之后注册表只读。
#[cfg_attr(not(feature = "activedir"), allow(unused_variables))]
pub fn register_all_providers(
    registry: &mut ProviderTypeRegistry,
    gate: Arc<dyn PlatformGate>,
) -> Result<()> {
    #[cfg(feature = "activedir")]
    registry.register(activedir::registration(gate))?;

    log::debug!("Provider types available: {:?}", registry.names());
    Ok(())
}
