//! Provider 抽象 Trait

use async_trait::async_trait;

use crate::error::Result;

/// DNS 服务 Provider
///
/// 由 Registry 中登记的初始化函数创建，创建后归调用方独占。
#[async_trait]
pub trait DnsServiceProvider: Send + Sync + std::fmt::Debug {
    /// Provider 类型名（与注册名一致）
    fn provider_type(&self) -> &'static str;

    /// 是否为无操作占位实例
    ///
    /// 运行环境不满足要求时，初始化会成功返回一个占位实例而不是错误，
    /// 后续流程应跳过它。
    fn is_noop(&self) -> bool {
        false
    }

    /// 获取该 Provider 为指定域名提供的 NS 列表
    async fn get_nameservers(&self, domain: &str) -> Result<Vec<String>>;
}

/// 平台能力检查
///
/// 回答"当前进程能否调用外部管理工具"。实现不得有副作用。
pub trait PlatformGate: Send + Sync {
    fn can_execute_management_tool(&self) -> bool;
}
