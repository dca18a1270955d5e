//! YAML 文件加载器

use std::path::Path;

use super::core::{ConfigMap, FileLoader, LoadError};

/// YAML 加载器，处理 `.yaml` 和 `.yml` 文件
///
/// 空文档解码为空映射。解析能力由 `yaml` feature 提供，未启用时首次使用报
/// [`LoadError::MissingDependency`]。
#[derive(Debug, Default)]
pub struct YamlLoader;

impl YamlLoader {
    pub fn new() -> Self {
        Self
    }
}

impl FileLoader for YamlLoader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn supported_extensions(&self) -> &'static [&'static str] {
        &[".yaml", ".yml"]
    }

    #[cfg(feature = "yaml")]
    fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_yaml::from_str(&content)
            .map_err(|e| LoadError::from_parse(e, "yaml", "YAML 解码失败"))?;
        super::core::value_into_map(value, "yaml")
    }

    #[cfg(not(feature = "yaml"))]
    fn loads(&self, _path: &Path) -> Result<ConfigMap, LoadError> {
        Err(LoadError::MissingDependency {
            format: "yaml".to_string(),
            dependency: "serde_yaml".to_string(),
        })
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_loads_nested_yaml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.yaml");

        fs::write(
            &path,
            r#"
host: localhost
port: 3306
tags:
  - a
  - b
database:
  name: app
  readonly: false
"#,
        )?;

        let config = YamlLoader::new().loads(&path)?;
        assert_eq!(config["host"], "localhost");
        assert_eq!(config["port"], 3306);
        assert_eq!(config["tags"], json!(["a", "b"]));
        assert_eq!(config["database"]["readonly"], false);
        Ok(())
    }

    #[test]
    fn test_loads_empty_document() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.yml");

        fs::write(&path, "")?;

        let config = YamlLoader::new().loads(&path)?;
        assert!(config.is_empty());
        Ok(())
    }

    #[test]
    fn test_loads_malformed_yaml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.yaml");

        fs::write(&path, "key: [unclosed")?;

        let err = YamlLoader::new().loads(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(std::error::Error::source(&err).is_some());
        Ok(())
    }
}
