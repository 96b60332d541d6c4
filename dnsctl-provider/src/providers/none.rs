//! 无操作 Provider

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsServiceProvider;

/// 已注册但不执行任何操作的占位 Provider
///
/// 运行环境不满足要求时由初始化函数返回。它代表"这里没有事情可做"，不是失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoopProvider {
    provider_type: &'static str,
    reason: String,
}

impl NoopProvider {
    pub fn new(provider_type: &'static str, reason: impl Into<String>) -> Self {
        Self {
            provider_type,
            reason: reason.into(),
        }
    }

    /// 处于占位状态的原因
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[async_trait]
impl DnsServiceProvider for NoopProvider {
    fn provider_type(&self) -> &'static str {
        self.provider_type
    }

    fn is_noop(&self) -> bool {
        true
    }

    async fn get_nameservers(&self, _domain: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_has_no_nameservers() {
        let provider = NoopProvider::new("ACTIVEDIRECTORY_PS", "tool unavailable");
        assert!(provider.is_noop());
        assert_eq!(provider.reason(), "tool unavailable");
        assert!(provider.get_nameservers("example.com").await.unwrap().is_empty());
    }
}
