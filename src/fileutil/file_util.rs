//! 文件访问门面
//!
//! 在 loader 链之上包一层路径解析和存在性检查：相对路径基于工作目录解析，
//! 文件不存在时在进入链之前就报错。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::loader::{default_chain, ConfigMap, LoadError, LoaderNode};

/// 文件访问门面的配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileUtilConfig {
    /// 相对路径解析的基准目录
    pub work_dir: String,
}

/// 文件访问门面
///
/// 持有一条 loader 链（共享引用，多个实例可以复用同一条链）和一个工作目录。
/// 每次 [`read_file`](FileUtil::read_file) 都重新读取并解析文件，不缓存内容。
///
/// # 示例
/// ```no_run
/// use loadx::fileutil::{FileUtil, FileUtilConfig};
///
/// let util = FileUtil::new(FileUtilConfig {
///     work_dir: "config".to_string(),
/// }).unwrap();
///
/// // 加载 config/database.json
/// let config = util.read_file("database.json").unwrap();
/// ```
pub struct FileUtil {
    work_dir: PathBuf,
    chain: Arc<LoaderNode>,
}

impl FileUtil {
    /// 创建文件访问门面，使用注册表的默认链
    ///
    /// # 参数
    /// - `config`: 门面配置
    pub fn new(config: FileUtilConfig) -> Result<Self> {
        Ok(Self {
            work_dir: config.work_dir.into(),
            chain: Arc::new(default_chain()?),
        })
    }

    /// 创建文件访问门面，使用调用方提供的链
    ///
    /// 链头以 `Arc` 共享，多个门面可以引用同一条链。
    pub fn with_chain(config: FileUtilConfig, chain: Arc<LoaderNode>) -> Self {
        Self {
            work_dir: config.work_dir.into(),
            chain,
        }
    }

    /// 工作目录
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// 当前使用的 loader 链
    pub fn chain(&self) -> &Arc<LoaderNode> {
        &self.chain
    }

    /// 在目录下递归查找文件，返回第一个命中的路径
    ///
    /// # 参数
    /// - `filename`: 文件名，如 `settings.toml`
    /// - `dir`: 查找目录，缺省为工作目录
    pub fn find(&self, filename: &str, dir: Option<&Path>) -> Result<PathBuf, LoadError> {
        let base = dir.unwrap_or(&self.work_dir);
        let pattern = base.join("**").join(filename);

        glob::glob(&pattern.to_string_lossy())?
            .filter_map(|entry| entry.ok())
            .find(|path| path.is_file())
            .ok_or_else(|| LoadError::FileNotFound {
                path: format!("{}（在 {} 下未找到）", filename, base.display()),
            })
    }

    /// 读取并解析文件
    ///
    /// 相对路径基于工作目录解析；裸文件名在直接解析未命中时退化为递归查找。
    /// 文件不存在时返回 [`LoadError::FileNotFound`]，不会进入任何 loader；
    /// 否则交给链头派发。每次调用都重新读取和解析，不缓存结果。
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<ConfigMap, LoadError> {
        let path = path.as_ref();
        let resolved = self.resolve(path)?;

        log::debug!("读取文件: {}", resolved.display());
        self.chain.handle(&resolved)
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, LoadError> {
        let direct = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        };

        if direct.is_file() {
            return Ok(direct);
        }

        // 裸文件名退化为递归查找；带目录成分的路径不做回退
        if !path.is_absolute() && path.components().count() == 1 {
            if let Some(filename) = path.to_str() {
                return self.find(filename, None);
            }
        }

        Err(LoadError::FileNotFound {
            path: direct.display().to_string(),
        })
    }
}
