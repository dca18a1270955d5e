//! env 文件加载器

use std::path::Path;

use super::core::{ConfigMap, FileLoader, LoadError};

/// env 加载器，处理 `.env` 文件（包括名为 `.env` 的隐藏文件）
///
/// 解码为单层的字符串到字符串映射，不做类型推断。解析能力由 `env` feature
/// 提供，未启用时首次使用报 [`LoadError::MissingDependency`]。
#[derive(Debug, Default)]
pub struct EnvLoader;

impl EnvLoader {
    pub fn new() -> Self {
        Self
    }
}

impl FileLoader for EnvLoader {
    fn name(&self) -> &'static str {
        "env"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".env"]
    }

    #[cfg(feature = "env")]
    fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError> {
        let mut map = ConfigMap::new();

        for item in dotenvy::from_path_iter(path)
            .map_err(|e| LoadError::from_parse(e, "env", "env 文件读取失败"))?
        {
            let (key, value) =
                item.map_err(|e| LoadError::from_parse(e, "env", "env 行解码失败"))?;
            map.insert(key, serde_json::Value::String(value));
        }

        Ok(map)
    }

    #[cfg(not(feature = "env"))]
    fn loads(&self, _path: &Path) -> Result<ConfigMap, LoadError> {
        Err(LoadError::MissingDependency {
            format: "env".to_string(),
            dependency: "dotenvy".to_string(),
        })
    }
}
