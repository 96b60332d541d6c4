//! 错误处理模块

use std::path::PathBuf;

/// 应用错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("读取配置文件失败 {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Provider {name} 的 metadata 不是合法 JSON: {source}")]
    InvalidMetadata {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider 错误: {0}")]
    Provider(#[from] dnsctl_provider::ProviderError),
}

/// 应用层 Result 别名
pub type AppResult<T> = Result<T, AppError>;
