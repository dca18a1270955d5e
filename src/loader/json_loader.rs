//! JSON 文件加载器

use std::path::Path;

use super::core::{ConfigMap, FileLoader, LoadError};

/// JSON 加载器，处理 `.json` 文件
///
/// 顶层必须是 JSON 对象。
#[derive(Debug, Default)]
pub struct JsonLoader;

impl JsonLoader {
    pub fn new() -> Self {
        Self
    }
}

impl FileLoader for JsonLoader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".json"]
    }

    #[cfg(feature = "json")]
    fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| LoadError::from_parse(e, "json", "JSON 解码失败"))?;
        super::core::value_into_map(value, "json")
    }

    #[cfg(not(feature = "json"))]
    fn loads(&self, _path: &Path) -> Result<ConfigMap, LoadError> {
        Err(LoadError::MissingDependency {
            format: "json".to_string(),
            dependency: "serde_json".to_string(),
        })
    }
}
