//! 公共类型定义

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capability, CapabilityMatrix};

/// Provider 原始元数据（不解析，原样透传）
pub type RawMetadata = serde_json::value::RawValue;

/// Provider 配置（扁平的字符串键值对）
///
/// 键区分大小写，未知键会被忽略。读取不存在的键得到空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfig(HashMap<String, String>);

impl ProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取配置项，不存在时返回 `""`
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map_or("", String::as_str)
    }

    /// 写入配置项（链式）
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ProviderConfig {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// DNS 记录类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Caa,
    Ptr,
    Alias,
}

impl DnsRecordType {
    /// 使用该记录类型所需的能力（常规类型返回 `None`）
    pub fn required_capability(self) -> Option<Capability> {
        match self {
            Self::Alias => Some(Capability::CanUseAlias),
            Self::Caa => Some(Capability::CanUseCaa),
            Self::Ptr => Some(Capability::CanUsePtr),
            Self::Srv => Some(Capability::CanUseSrv),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Ptr => "PTR",
            Self::Alias => "ALIAS",
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 待审计的 DNS 记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordConfig {
    /// 记录名（相对于 zone，`@` 表示根）
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub value: String,
    pub ttl: u32,
}

/// Provider 元数据（用于文档生成）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub name: String,
    pub capabilities: CapabilityMatrix,
}
