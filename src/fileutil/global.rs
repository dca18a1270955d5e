//! 全局 FileUtil 实例缓存
//!
//! 按工作目录缓存 [`FileUtil`] 实例：同一目录的多次获取返回同一个实例。
//! 缓存的检查和写入在同一把锁内完成，并发首次获取也不会构造出重复实例。
//! 缓存随进程存活，测试可通过 [`clear_instances`] 重置。

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;

use super::file_util::{FileUtil, FileUtilConfig};

/// 全局实例缓存，key 为工作目录字符串
static INSTANCES: Lazy<Mutex<HashMap<String, Arc<FileUtil>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// 获取指定目录的缓存实例，不存在时用默认链构造并缓存
///
/// # 参数
/// - `dir`: 工作目录
///
/// # 示例
/// ```no_run
/// use loadx::fileutil::from_dir;
///
/// let util = from_dir("config").unwrap();
/// let database = util.read_file("database.yaml").unwrap();
/// ```
pub fn from_dir(dir: impl AsRef<Path>) -> Result<Arc<FileUtil>> {
    let key = dir.as_ref().display().to_string();

    let mut instances = INSTANCES
        .lock()
        .map_err(|_| anyhow!("获取全局锁失败"))?;

    if let Some(existing) = instances.get(&key) {
        return Ok(existing.clone());
    }

    log::debug!("构造新的 FileUtil 实例: {}", key);
    let instance = Arc::new(FileUtil::new(FileUtilConfig {
        work_dir: key.clone(),
    })?);
    instances.insert(key, instance.clone());

    Ok(instance)
}

/// 获取当前工作目录的缓存实例
///
/// 同一工作目录下的多次调用返回同一个实例（指针相等）。
pub fn from_cwd() -> Result<Arc<FileUtil>> {
    let cwd = std::env::current_dir()?;
    from_dir(cwd)
}

/// 清空全局实例缓存
///
/// 仅用于测试隔离，避免用例之间互相污染。
pub fn clear_instances() {
    if let Ok(mut instances) = INSTANCES.lock() {
        instances.clear();
    }
}
