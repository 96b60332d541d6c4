//! dnsctl
//!
//! 启动时显式注册所有 Provider 类型，再按配置文件逐个初始化 Provider 实例。
//!
//! 用法: `dnsctl [CONFIG] [--docs]`

mod config;
mod error;

use std::sync::Arc;

use dnsctl_provider::{
    DnsServiceProvider, HostPlatform, PlatformGate, ProviderTypeRegistry, register_all_providers,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use error::AppResult;

/// 初始化完成的 Provider 实例
struct LoadedProvider {
    name: String,
    domains: Vec<String>,
    provider: Box<dyn DnsServiceProvider>,
}

/// 初始化统计
#[derive(Debug, Default, PartialEq, Eq)]
struct InitSummary {
    ready: usize,
    noop: usize,
    failed: usize,
}

/// 创建注册表并登记所有 Provider 类型
fn init_registry(gate: Arc<dyn PlatformGate>) -> AppResult<ProviderTypeRegistry> {
    let mut registry = ProviderTypeRegistry::new();
    register_all_providers(&mut registry, gate)?;
    Ok(registry)
}

/// 按配置初始化 Provider，单个失败不影响其他
fn init_providers(
    registry: &ProviderTypeRegistry,
    config: &AppConfig,
) -> (Vec<LoadedProvider>, InitSummary) {
    let mut loaded = Vec::new();
    let mut summary = InitSummary::default();

    for (name, entry) in &config.providers {
        let metadata = match entry.raw_metadata(name) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!("加载 Provider {} 失败: {}", name, e);
                summary.failed += 1;
                continue;
            }
        };

        match registry.initialize(&entry.provider_type, &entry.settings, metadata.as_deref()) {
            Ok(provider) if provider.is_noop() => {
                tracing::warn!("Provider {} ({}) 不可用，已跳过", name, entry.provider_type);
                summary.noop += 1;
            }
            Ok(provider) => {
                tracing::info!("已加载 Provider: {} ({})", name, entry.provider_type);
                summary.ready += 1;
                loaded.push(LoadedProvider {
                    name: name.clone(),
                    domains: entry.domains.clone(),
                    provider,
                });
            }
            Err(e) => {
                tracing::error!("加载 Provider {} 失败: {}", name, e);
                summary.failed += 1;
            }
        }
    }

    (loaded, summary)
}

/// 所有 Provider 的能力矩阵（JSON）
fn render_docs(registry: &ProviderTypeRegistry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&registry.list_metadata())
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let print_docs = args.iter().any(|a| a == "--docs");
    let config_arg = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    // 文档输出不依赖配置文件
    if print_docs {
        init_tracing(config::DEFAULT_LOG_LEVEL);
        let registry = init_registry(Arc::new(HostPlatform))?;
        println!("{}", render_docs(&registry)?);
        return Ok(());
    }

    let location = config::resolve_config_path(config_arg);
    let config = AppConfig::load(&location)?;

    init_tracing(&config.log.level);
    tracing::info!("配置加载完成: {}", location.path.display());

    let registry = init_registry(Arc::new(HostPlatform))?;

    let (loaded, summary) = init_providers(&registry, &config);
    tracing::info!(
        "Provider 初始化完成: {} 可用, {} 跳过, {} 失败",
        summary.ready,
        summary.noop,
        summary.failed
    );

    for LoadedProvider {
        name,
        domains,
        provider,
    } in &loaded
    {
        for domain in domains {
            let nameservers = provider.get_nameservers(domain).await?;
            tracing::info!("[{}] {} nameservers: {:?}", name, domain, nameservers);
        }
    }

    if summary.failed > 0 {
        anyhow::bail!("{} 个 Provider 初始化失败", summary.failed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsctl_provider::FixedPlatform;

    const CONFIG: &str = r#"
        [providers.fake]
        type = "ACTIVEDIRECTORY_PS"
        [providers.fake.settings]
        fakeps = "true"

        [providers.real]
        type = "ACTIVEDIRECTORY_PS"
        [providers.real.settings]
        ADServer = "dc1.example.com"

        [providers.broken]
        type = "ACTIVEDIRECTORY_PS"
        [providers.broken.settings]
        fakeps = "bogus"

        [providers.unknown]
        type = "BIND"
    "#;

    #[test]
    fn test_init_providers_capable_platform() {
        let registry = init_registry(Arc::new(FixedPlatform::CAPABLE)).unwrap();
        let config = AppConfig::parse(CONFIG).unwrap();

        let (loaded, summary) = init_providers(&registry, &config);
        assert_eq!(
            summary,
            InitSummary {
                ready: 2,
                noop: 0,
                failed: 2
            }
        );
        let names: Vec<_> = loaded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fake", "real"]);
    }

    #[test]
    fn test_init_providers_incapable_platform() {
        let registry = init_registry(Arc::new(FixedPlatform::INCAPABLE)).unwrap();
        let config = AppConfig::parse(CONFIG).unwrap();

        let (loaded, summary) = init_providers(&registry, &config);
        assert_eq!(
            summary,
            InitSummary {
                ready: 1,
                noop: 1,
                failed: 2
            }
        );
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "fake");
    }

    #[test]
    fn test_docs_output() {
        let registry = init_registry(Arc::new(FixedPlatform::INCAPABLE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_docs(&registry).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "ACTIVEDIRECTORY_PS");
        assert_eq!(
            json[0]["capabilities"]["docOfficiallySupported"]["status"],
            "supported"
        );
        assert_eq!(
            json[0]["capabilities"]["canGetZones"]["status"],
            "unimplemented"
        );
    }
}
