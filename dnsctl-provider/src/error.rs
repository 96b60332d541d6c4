//! Provider 错误类型

use thiserror::Error;

/// Provider 层统一错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// 配置项取值不在允许范围内
    #[error("[{provider}] 配置项 {key} 的值无效: '{value}' (允许: {expected})")]
    InvalidConfigValue {
        provider: String,
        key: String,
        value: String,
        expected: String,
    },

    /// 缺少必需的配置项
    #[error("[{provider}] 缺少必需的配置项: {key}")]
    MissingRequiredConfig { provider: String, key: String },

    /// Registry 中没有该类型的 Provider
    #[error("未知的 Provider 类型: {name}")]
    UnknownProviderType { name: String },

    /// 同名 Provider 类型重复注册
    #[error("Provider 类型重复注册: {name}")]
    DuplicateProviderType { name: String },

    /// 记录审计不通过
    #[error("[{provider}] 不支持的记录 {record_name} ({record_type}): {reason}")]
    UnsupportedRecord {
        provider: String,
        record_type: String,
        record_name: String,
        reason: String,
    },
}

/// Provider 层 Result 别名
pub type Result<T> = std::result::Result<T, ProviderError>;
