//! Loader 责任链
//!
//! 把若干 [`FileLoader`] 串成单向链表，按顺序尝试匹配扩展名，第一个命中的
//! loader 负责解码。`next` 通过 `Box` 独占持有，链上不可能出现环。

use std::path::Path;

use super::core::{display_extension, ConfigMap, FileLoader, LoadError};

/// 责任链节点
///
/// 持有一个 loader 和可选的下一个节点。链头即整条链的入口。
///
/// # 示例
/// ```ignore
/// use loadx::loader::{default_chain, LoaderNode};
///
/// let chain = default_chain().unwrap();
/// let config = chain.handle("config.json".as_ref()).unwrap();
/// ```
pub struct LoaderNode {
    loader: Box<dyn FileLoader>,
    next: Option<Box<LoaderNode>>,
}

impl LoaderNode {
    /// 创建单节点链
    pub fn new(loader: Box<dyn FileLoader>) -> Self {
        Self { loader, next: None }
    }

    /// 按给定顺序把一组 loader 串成链，返回链头
    ///
    /// 空列表返回 `None`。
    pub fn from_loaders(loaders: Vec<Box<dyn FileLoader>>) -> Option<Self> {
        let mut head: Option<LoaderNode> = None;

        // 从尾部向头部构建
        for loader in loaders.into_iter().rev() {
            let mut node = LoaderNode::new(loader);
            node.next = head.take().map(Box::new);
            head = Some(node);
        }

        head
    }

    /// 显式设置后继节点，返回被替换下来的链尾
    ///
    /// 手动拼接链时使用，可以把自定义 loader 插入任意位置。
    pub fn set_next(&mut self, next: Option<LoaderNode>) -> Option<LoaderNode> {
        let old = self.next.take();
        self.next = next.map(Box::new);
        old.map(|boxed| *boxed)
    }

    /// 在链尾追加一个 loader
    pub fn push(&mut self, loader: Box<dyn FileLoader>) {
        let mut node = self;
        while let Some(ref mut next) = node.next {
            node = next;
        }
        node.next = Some(Box::new(LoaderNode::new(loader)));
    }

    /// 链上的派发入口
    ///
    /// 从当前节点开始逐个询问 `supports`，命中的节点调用自己的 `loads`；
    /// 走到链尾仍无人认领时返回 [`LoadError::UnsupportedFileFormat`]，
    /// 错误信息中带上实际的扩展名。
    pub fn handle(&self, path: &Path) -> Result<ConfigMap, LoadError> {
        let mut node = Some(self);

        while let Some(current) = node {
            if current.loader.supports(path) {
                log::debug!(
                    "loader [{}] 命中文件: {}",
                    current.loader.name(),
                    path.display()
                );
                return current.loader.loads(path);
            }
            node = current.next.as_deref();
        }

        Err(LoadError::UnsupportedFileFormat {
            extension: display_extension(path),
        })
    }

    /// 链长度
    pub fn len(&self) -> usize {
        let mut count = 1;
        let mut node = self.next.as_deref();
        while let Some(current) = node {
            count += 1;
            node = current.next.as_deref();
        }
        count
    }

    /// 按链序返回各节点 loader 的名称
    pub fn loader_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            names.push(current.loader.name());
            node = current.next.as_deref();
        }
        names
    }
}

impl std::fmt::Debug for LoaderNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderNode")
            .field("chain", &self.loader_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// 记录调用次数的测试 loader
    struct RecordingLoader {
        name: &'static str,
        extensions: &'static [&'static str],
        calls: Arc<AtomicUsize>,
    }

    impl FileLoader for RecordingLoader {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supported_extensions(&self) -> &'static [&'static str] {
            self.extensions
        }

        fn loads(&self, _path: &Path) -> Result<ConfigMap, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut map = ConfigMap::new();
            map.insert("loaded_by".to_string(), json!(self.name));
            Ok(map)
        }
    }

    fn recording(
        name: &'static str,
        extensions: &'static [&'static str],
    ) -> (Box<dyn FileLoader>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = RecordingLoader {
            name,
            extensions,
            calls: calls.clone(),
        };
        (Box::new(loader), calls)
    }

    #[test]
    fn test_handle_dispatches_to_matching_loader() {
        let (alpha, alpha_calls) = recording("alpha", &[".alpha"]);
        let (beta, beta_calls) = recording("beta", &[".beta"]);

        let chain = LoaderNode::from_loaders(vec![alpha, beta]).unwrap();

        let result = chain.handle(Path::new("config.beta")).unwrap();
        assert_eq!(result["loaded_by"], "beta");

        // 只有命中的 loader 被调用
        assert_eq!(alpha_calls.load(Ordering::SeqCst), 0);
        assert_eq!(beta_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_exhausted_chain() {
        let (alpha, _) = recording("alpha", &[".alpha"]);
        let chain = LoaderNode::new(alpha);

        let err = chain.handle(Path::new("settings.ini")).unwrap_err();
        match err {
            LoadError::UnsupportedFileFormat { extension } => {
                assert_eq!(extension, ".ini");
            }
            other => panic!("期望 UnsupportedFileFormat，得到 {:?}", other),
        }
    }

    #[test]
    fn test_from_loaders_preserves_order() {
        let (a, _) = recording("a", &[".a"]);
        let (b, _) = recording("b", &[".b"]);
        let (c, _) = recording("c", &[".c"]);

        let chain = LoaderNode::from_loaders(vec![a, b, c]).unwrap();
        assert_eq!(chain.loader_names(), vec!["a", "b", "c"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_from_loaders_empty() {
        assert!(LoaderNode::from_loaders(Vec::new()).is_none());
    }

    #[test]
    fn test_push_appends_at_tail() {
        let (a, _) = recording("a", &[".a"]);
        let (b, _) = recording("b", &[".b"]);
        let (c, _) = recording("c", &[".c"]);

        let mut chain = LoaderNode::new(a);
        chain.push(b);
        chain.push(c);

        assert_eq!(chain.loader_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_next_splices_custom_loader() {
        let (a, _) = recording("a", &[".a"]);
        let (b, _) = recording("b", &[".b"]);
        let (custom, custom_calls) = recording("custom", &[".custom"]);

        let mut chain = LoaderNode::from_loaders(vec![a, b]).unwrap();

        // 把 custom 插到 a 之后，原来的链尾接到 custom 之后
        let mut custom_node = LoaderNode::new(custom);
        let tail = chain.set_next(None);
        custom_node.set_next(tail);
        chain.set_next(Some(custom_node));

        assert_eq!(chain.loader_names(), vec!["a", "custom", "b"]);

        let result = chain.handle(Path::new("x.custom")).unwrap();
        assert_eq!(result["loaded_by"], "custom");
        assert_eq!(custom_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_first_match_wins() {
        // 两个 loader 声明同一扩展名时，链序在前者生效
        let (first, first_calls) = recording("first", &[".dup"]);
        let (second, second_calls) = recording("second", &[".dup"]);

        let chain = LoaderNode::from_loaders(vec![first, second]).unwrap();
        let result = chain.handle(Path::new("x.dup")).unwrap();

        assert_eq!(result["loaded_by"], "first");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }
}
