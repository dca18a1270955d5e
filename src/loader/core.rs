//! Loader 核心抽象
//!
//! 定义文件加载器的统一接口和错误类型，所有格式的 loader 都实现 `FileLoader` trait。

use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

/// 解析结果的统一数据模型：字符串 key 到任意 JSON 值的映射
///
/// 这是 JSON/YAML/TOML/env 解码结果的公共子集：字符串、数字、布尔、null、
/// 嵌套映射和有序序列。
pub type ConfigMap = serde_json::Map<String, JsonValue>;

/// 文件加载统一错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("不支持的文件格式: {extension}")]
    UnsupportedFileFormat { extension: String },

    #[error("缺少依赖 [{dependency}]，无法解析 {format} 格式")]
    MissingDependency { format: String, dependency: String },

    #[error("解析 {format} 失败: {message}")]
    Parse {
        format: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的文件名模式: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl LoadError {
    /// 从格式库错误转换，保留原始错误作为 source
    pub fn from_parse<E>(err: E, format: &str, context: &str) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LoadError::Parse {
            format: format.to_string(),
            message: context.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// 文件加载器 trait
///
/// 每个实现对应一种文件格式，声明自己支持的扩展名集合，并负责把文件内容
/// 解码为 [`ConfigMap`]。
///
/// # 示例
/// ```ignore
/// use loadx::loader::{ConfigMap, FileLoader, LoadError};
/// use std::path::Path;
///
/// struct PropertiesLoader;
///
/// impl FileLoader for PropertiesLoader {
///     fn name(&self) -> &'static str {
///         "properties"
///     }
///
///     fn supported_extensions(&self) -> &'static [&'static str] {
///         &[".properties"]
///     }
///
///     fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError> {
///         // 逐行解析 key=value ...
///         # unimplemented!()
///     }
/// }
/// ```
pub trait FileLoader: Send + Sync {
    /// 格式名称，用于错误信息和日志
    fn name(&self) -> &'static str;

    /// 支持的扩展名集合，统一为带点的小写形式，如 `[".yaml", ".yml"]`
    fn supported_extensions(&self) -> &'static [&'static str];

    /// 解码文件内容
    ///
    /// 前置条件：文件存在且可读。格式错误时返回 [`LoadError::Parse`]，
    /// 并保留格式库的原始错误。
    fn loads(&self, path: &Path) -> Result<ConfigMap, LoadError>;

    /// 判断是否支持该文件
    ///
    /// 默认实现按扩展名做不区分大小写的匹配；无扩展名时退化为按完整文件名
    /// 匹配，兼容 `.env` 这类隐藏文件。
    fn supports(&self, path: &Path) -> bool {
        let extensions = self.supported_extensions();

        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            let dotted = format!(".{}", ext);
            if extensions.iter().any(|e| e.eq_ignore_ascii_case(&dotted)) {
                return true;
            }
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            return extensions.iter().any(|e| e.eq_ignore_ascii_case(name));
        }

        false
    }
}

/// 提取用于错误信息的扩展名
///
/// 优先取带点的小写扩展名；无扩展名时取完整文件名（如 `.env`）。
pub(crate) fn display_extension(path: &Path) -> String {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        return format!(".{}", ext.to_lowercase());
    }
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 把解码出的 JSON 值收敛为顶层映射
///
/// 顶层必须是对象；null 视为空文档（如空 YAML 文件），返回空映射。
pub(crate) fn value_into_map(value: JsonValue, format: &str) -> Result<ConfigMap, LoadError> {
    match value {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Ok(ConfigMap::new()),
        other => Err(LoadError::Parse {
            format: format.to_string(),
            message: format!("顶层不是映射，而是 {}", json_type_name(&other)),
            source: None,
        }),
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
