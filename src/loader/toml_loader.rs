//! TOML 文件加载器

use std::path::Path;

use super::core::{ConfigMap, FileLoader, LoadError};

/// TOML 加载器，处理 `.toml` 文件
///
/// 解析能力由 `toml` feature 提供，未启用时首次使用报
/// [`LoadError::MissingDependency`]。
#[derive(Debug, Default)]
pub struct TomlLoader;

impl TomlLoader {
    pub fn new() -> Self {
        Self
    }
}

impl FileLoader for TomlLoader {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".toml"]
    }

    #[cfg(feature = "toml")]
    fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = toml::from_str(&content)
            .map_err(|e| LoadError::from_parse(e, "toml", "TOML 解码失败"))?;
        super::core::value_into_map(value, "toml")
    }

    #[cfg(not(feature = "toml"))]
    fn loads(&self, _path: &Path) -> Result<ConfigMap, LoadError> {
        Err(LoadError::MissingDependency {
            format: "toml".to_string(),
            dependency: "toml".to_string(),
        })
    }
}
