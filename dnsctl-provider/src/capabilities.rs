//! Provider 能力矩阵
//!
//! 每个 Provider 类型在定义时声明一张静态能力表，运行时只读。
//! 文档生成工具和上游流程据此判断某类操作能否交给该 Provider。

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// 能力标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// 能否列出账户下的 zone
    CanGetZones,
    CanUseAlias,
    CanUseCaa,
    CanUsePtr,
    CanUseSrv,
    /// 能否自动创建 zone
    DocCreateDomains,
    /// 能否与其他 DNS 服务商同时托管
    DocDualHost,
    DocOfficiallySupported,
}

/// 单项能力的声明
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CapabilityEntry {
    Supported,
    Unsupported {
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<&'static str>,
    },
    Unimplemented,
}

impl CapabilityEntry {
    /// 不支持（无说明）
    pub const fn cannot() -> Self {
        Self::Unsupported { reason: None }
    }

    /// 不支持（附说明）
    pub const fn cannot_because(reason: &'static str) -> Self {
        Self::Unsupported {
            reason: Some(reason),
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }

    pub fn reason(self) -> Option<&'static str> {
        match self {
            Self::Unsupported { reason } => reason,
            _ => None,
        }
    }
}

/// 能力矩阵（不可变）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityMatrix {
    entries: &'static [(Capability, CapabilityEntry)],
}

impl CapabilityMatrix {
    pub const fn new(entries: &'static [(Capability, CapabilityEntry)]) -> Self {
        Self { entries }
    }

    /// 查询某项能力，未声明时返回 `None`
    pub fn get(&self, capability: Capability) -> Option<CapabilityEntry> {
        self.entries
            .iter()
            .find(|(c, _)| *c == capability)
            .map(|(_, entry)| *entry)
    }

    /// 是否明确声明支持
    pub fn supports(&self, capability: Capability) -> bool {
        self.get(capability).is_some_and(CapabilityEntry::is_supported)
    }

    /// 按声明顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Capability, CapabilityEntry)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CapabilityMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (capability, entry) in self.entries {
            map.serialize_entry(capability, entry)?;
        }
        map.end()
    }
}
