//! `DnsServiceProvider` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsServiceProvider;

use super::{ActiveDirectoryProvider, PROVIDER_NAME};

#[async_trait]
impl DnsServiceProvider for ActiveDirectoryProvider {
    fn provider_type(&self) -> &'static str {
        PROVIDER_NAME
    }

    // AD 不管理 NS 记录
    async fn get_nameservers(&self, domain: &str) -> Result<Vec<String>> {
        log::debug!("[{PROVIDER_NAME}] no nameservers managed for {domain}");
        Ok(Vec::new())
    }
}
