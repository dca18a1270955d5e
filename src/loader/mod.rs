//! 文件加载器模块
//!
//! 以责任链方式组织多个格式的 loader：按扩展名逐个匹配，第一个命中的负责
//! 解码。新格式通过注册表动态扩展，或手动拼接进链。

pub mod chain;
pub mod core;
pub mod env_loader;
pub mod json_loader;
pub mod registry;
pub mod toml_loader;
pub mod yaml_loader;

// 重新导出核心类型和 trait
pub use chain::LoaderNode;
pub use core::{ConfigMap, FileLoader, LoadError};
pub use registry::{default_chain, from_chain, register_loader, ChainOrder};

// 重新导出内置 loader
pub use env_loader::EnvLoader;
pub use json_loader::JsonLoader;
pub use toml_loader::TomlLoader;
pub use yaml_loader::YamlLoader;
