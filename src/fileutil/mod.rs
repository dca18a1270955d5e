//! 文件访问模块
//!
//! [`FileUtil`] 在 loader 链之上提供路径解析、存在性检查和递归查找；
//! `global` 子模块按工作目录缓存实例。

pub mod file_util;
pub mod global;

pub use file_util::{FileUtil, FileUtilConfig};
pub use global::{clear_instances, from_cwd, from_dir};
