//! Provider 类型注册表
//!
//! 启动时显式调用 [`crate::register_all_providers`] 填充，之后只读。

use std::collections::HashMap;
use std::fmt;

use crate::capabilities::CapabilityMatrix;
use crate::error::{ProviderError, Result};
use crate::traits::DnsServiceProvider;
use crate::types::{ProviderConfig, ProviderMetadata, RawMetadata, RecordConfig};

/// Provider 初始化函数
pub type Initializer = Box<
    dyn Fn(&ProviderConfig, Option<&RawMetadata>) -> Result<Box<dyn DnsServiceProvider>>
        + Send
        + Sync,
>;

/// 记录审计函数，返回所有不被支持的记录（空表示通过）
pub type RecordAuditor = fn(&[RecordConfig]) -> Vec<ProviderError>;

/// Provider 需要提供的函数对
pub struct DspFuncs {
    pub initializer: Initializer,
    pub record_auditor: RecordAuditor,
}

/// 一次注册的全部内容：名称、函数对、能力矩阵
pub struct ProviderRegistration {
    pub name: &'static str,
    pub funcs: DspFuncs,
    pub capabilities: CapabilityMatrix,
}

impl fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

/// Provider 类型注册表
#[derive(Debug, Default)]
pub struct ProviderTypeRegistry {
    providers: HashMap<&'static str, ProviderRegistration>,
}

impl ProviderTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Provider 类型，同名重复注册返回错误
    pub fn register(&mut self, registration: ProviderRegistration) -> Result<()> {
        if self.providers.contains_key(registration.name) {
            return Err(ProviderError::DuplicateProviderType {
                name: registration.name.to_string(),
            });
        }
        log::debug!("Registered provider type: {}", registration.name);
        self.providers.insert(registration.name, registration);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// 已注册的类型名（排序）
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.providers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn capabilities(&self, name: &str) -> Option<CapabilityMatrix> {
        self.providers.get(name).map(|r| r.capabilities)
    }

    /// 按类型名创建 Provider 实例
    pub fn initialize(
        &self,
        name: &str,
        config: &ProviderConfig,
        metadata: Option<&RawMetadata>,
    ) -> Result<Box<dyn DnsServiceProvider>> {
        let registration = self.lookup(name)?;
        (registration.funcs.initializer)(config, metadata)
    }

    /// 用该类型的审计函数检查记录
    pub fn audit(&self, name: &str, records: &[RecordConfig]) -> Result<Vec<ProviderError>> {
        let registration = self.lookup(name)?;
        Ok((registration.funcs.record_auditor)(records))
    }

    /// 所有 Provider 的元数据（按名称排序）
    pub fn list_metadata(&self) -> Vec<ProviderMetadata> {
        self.names()
            .into_iter()
            .filter_map(|name| {
                self.providers.get(name).map(|r| ProviderMetadata {
                    name: name.to_string(),
                    capabilities: r.capabilities,
                })
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&ProviderRegistration> {
        self.providers
            .get(name)
            .ok_or_else(|| ProviderError::UnknownProviderType {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Capability, CapabilityEntry};
    use crate::providers::NoopProvider;

    const DUMMY_FEATURES: CapabilityMatrix = CapabilityMatrix::new(&[(
        Capability::DocOfficiallySupported,
        CapabilityEntry::cannot(),
    )]);

    fn dummy_registration(name: &'static str) -> ProviderRegistration {
        ProviderRegistration {
            name,
            funcs: DspFuncs {
                initializer: Box::new(move |_: &ProviderConfig, _: Option<&RawMetadata>| {
                    Ok(Box::new(NoopProvider::new(name, "dummy")) as Box<dyn DnsServiceProvider>)
                }),
                record_auditor: |_| Vec::new(),
            },
            capabilities: DUMMY_FEATURES,
        }
    }

    #[test]
    fn test_register_and_initialize() {
        let mut registry = ProviderTypeRegistry::new();
        registry.register(dummy_registration("DUMMY")).unwrap();

        assert!(registry.contains("DUMMY"));
        let provider = registry
            .initialize("DUMMY", &ProviderConfig::new(), None)
            .unwrap();
        assert_eq!(provider.provider_type(), "DUMMY");
        assert!(provider.is_noop());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ProviderTypeRegistry::new();
        registry.register(dummy_registration("DUMMY")).unwrap();
        let err = registry.register(dummy_registration("DUMMY")).unwrap_err();
        assert_eq!(
            err,
            ProviderError::DuplicateProviderType {
                name: "DUMMY".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_provider_type() {
        let registry = ProviderTypeRegistry::new();
        let err = registry
            .initialize("MISSING", &ProviderConfig::new(), None)
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProviderType { .. }));
        assert!(registry.audit("MISSING", &[]).is_err());
    }

    #[test]
    fn test_list_metadata_sorted() {
        let mut registry = ProviderTypeRegistry::new();
        registry.register(dummy_registration("ZETA")).unwrap();
        registry.register(dummy_registration("ALPHA")).unwrap();

        let names: Vec<_> = registry
            .list_metadata()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["ALPHA", "ZETA"]);
        assert_eq!(registry.capabilities("ALPHA"), Some(DUMMY_FEATURES));
    }
}
