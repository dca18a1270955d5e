//! Loader 注册表和默认链构建
//!
//! 维护一个进程级、只增不删的 loader 工厂列表。内置四种格式在注册表初始化时
//! 注册，新格式通过 [`register_loader`] 动态加入，之后构建的链会自动包含它，
//! 已构建的链不受影响。

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

use super::chain::LoaderNode;
use super::core::FileLoader;
use super::env_loader::EnvLoader;
use super::json_loader::JsonLoader;
use super::toml_loader::TomlLoader;
use super::yaml_loader::YamlLoader;

/// loader 工厂类型
type LoaderFactory = Box<dyn Fn() -> Box<dyn FileLoader> + Send + Sync>;

/// 全局注册表，内置 loader 按 env、toml、yaml、json 的顺序预注册
static REGISTRY: Lazy<RwLock<Vec<LoaderFactory>>> = Lazy::new(|| {
    let builtins: Vec<LoaderFactory> = vec![
        Box::new(|| Box::new(EnvLoader::new())),
        Box::new(|| Box::new(TomlLoader::new())),
        Box::new(|| Box::new(YamlLoader::new())),
        Box::new(|| Box::new(JsonLoader::new())),
    ];
    RwLock::new(builtins)
});

/// 链的构建顺序
///
/// 注册顺序是隐式状态，这里把顺序做成显式参数，避免调用方依赖注册副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainOrder {
    /// 按注册顺序：先注册的在链头
    Registration,
    /// 按注册逆序：后注册的在链头（默认，新注册的 loader 优先匹配）
    #[default]
    ReverseRegistration,
}

/// 注册一个新的 loader 工厂
///
/// 注册表只增不删。注册后通过 [`from_chain`] 构建的链会包含新 loader，
/// 已经构建好的链实例不受影响。
///
/// # 示例
/// ```ignore
/// use loadx::loader::{register_loader, PropertiesLoader};
///
/// register_loader(|| Box::new(PropertiesLoader::new()))?;
/// ```
pub fn register_loader<F>(factory: F) -> Result<()>
where
    F: Fn() -> Box<dyn FileLoader> + Send + Sync + 'static,
{
    let mut registry = REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry.push(Box::new(factory));
    Ok(())
}

/// 按指定顺序用全部已注册的 loader 构建一条新链
///
/// 每次调用都实例化全新的 loader，互不共享状态。复杂度 O(已注册数量)。
pub fn from_chain(order: ChainOrder) -> Result<LoaderNode> {
    let registry = REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let mut loaders: Vec<Box<dyn FileLoader>> =
        registry.iter().map(|factory| factory()).collect();

    if order == ChainOrder::ReverseRegistration {
        loaders.reverse();
    }

    LoaderNode::from_loaders(loaders).ok_or_else(|| anyhow!("Loader registry is empty"))
}

/// 用默认顺序构建链（注册逆序，后注册的优先）
pub fn default_chain() -> Result<LoaderNode> {
    from_chain(ChainOrder::default())
}
