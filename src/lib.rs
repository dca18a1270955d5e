//! LoadX - 扩展名驱动的多格式配置文件加载库
//!
//! 把 env/TOML/YAML/JSON 等格式的文件统一加载为字符串 key 到任意值的映射，
//! 格式派发走责任链：按扩展名逐个匹配，第一个命中的 loader 负责解码。
//!
//! ## 模块
//!
//! - **loader**: loader 责任链、注册表和内置格式实现
//! - **fileutil**: 文件访问门面，路径解析 + 按工作目录缓存实例
//!
//! ## 设计理念
//!
//! - 🔗 **责任链派发**: 按扩展名逐节点匹配，链外格式报 UnsupportedFileFormat
//! - 🧩 **动态扩展**: 新格式注册进全局注册表，已有代码无需改动
//! - 📦 **按需依赖**: 各格式的解析库由 feature 控制，未启用时首次使用才报错
//! - 🗂 **实例缓存**: 同一工作目录共享同一个 FileUtil 实例
//!
//! ## 示例
//!
//! ```no_run
//! use loadx::fileutil::from_cwd;
//!
//! let util = from_cwd().unwrap();
//! let config = util.read_file("config.yaml").unwrap();
//! println!("host = {}", config["host"]);
//! ```

pub mod fileutil;
pub mod loader;

// 重新导出主要的公共 API
pub use fileutil::{clear_instances, from_cwd, from_dir, FileUtil, FileUtilConfig};
pub use loader::{
    default_chain, from_chain, register_loader, ChainOrder, ConfigMap, EnvLoader, FileLoader,
    JsonLoader, LoadError, LoaderNode, TomlLoader, YamlLoader,
};
