//! 平台检查实现

use crate::traits::PlatformGate;

/// 依据编译目标操作系统判断
///
/// 外部管理工具（`PowerShell` DnsServer 模块）只在 Windows 上可用。
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl HostPlatform {
    /// 管理工具要求的操作系统
    pub const REQUIRED_OS: &'static str = "windows";
}

impl PlatformGate for HostPlatform {
    fn can_execute_management_tool(&self) -> bool {
        std::env::consts::OS == Self::REQUIRED_OS
    }
}

/// 固定返回值（测试或强制指定模式时使用）
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform(pub bool);

impl FixedPlatform {
    pub const CAPABLE: Self = Self(true);
    pub const INCAPABLE: Self = Self(false);
}

impl PlatformGate for FixedPlatform {
    fn can_execute_management_tool(&self) -> bool {
        self.0
    }
}
