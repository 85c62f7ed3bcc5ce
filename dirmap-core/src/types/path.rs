//! 绝对路径类型

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::utils::{clean, join_clean};

/// 规范化后的绝对路径
///
/// 始终为绝对路径，且不以分隔符结尾（根目录本身除外）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AbsolutePath(PathBuf);

impl AbsolutePath {
    /// 以当前工作目录为基准解析并清理路径
    pub fn resolve(path: impl AsRef<Path>) -> io::Result<Self> {
        let absolute = std::path::absolute(path.as_ref())?;
        Ok(Self(clean(&absolute)))
    }

    /// 拼接一个条目名并清理（`..` 与子目录共用此路径）
    #[must_use]
    pub fn join_entry(&self, name: &str) -> Self {
        Self(join_clean(&self.0, name))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 最后一个路径分量；根目录返回其自身
    pub fn base_name(&self) -> String {
        match self.0.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.0.to_string_lossy().into_owned(),
        }
    }

    /// 是否为文件系统根目录
    pub fn is_root(&self) -> bool {
        self.0.parent().is_none()
    }

    /// 根目录之下的层级数
    pub fn depth(&self) -> usize {
        self.0
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count()
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cleans_path() {
        let path = AbsolutePath::resolve("/tmp//x/../y/").unwrap();
        assert_eq!(path.as_path(), Path::new("/tmp/y"));
        assert_eq!(path.to_string(), "/tmp/y");
    }

    #[test]
    fn test_resolve_relative_is_absolute() {
        let path = AbsolutePath::resolve(".").unwrap();
        assert!(path.as_path().is_absolute());
        assert_eq!(path, AbsolutePath::resolve(std::env::current_dir().unwrap()).unwrap());
    }

    #[test]
    fn test_base_name_and_depth() {
        let path = AbsolutePath::resolve("/usr/local/bin").unwrap();
        assert_eq!(path.base_name(), "bin");
        assert_eq!(path.depth(), 3);
        assert!(!path.is_root());

        let root = AbsolutePath::resolve("/").unwrap();
        assert_eq!(root.base_name(), "/");
        assert_eq!(root.depth(), 0);
        assert!(root.is_root());
    }

    #[test]
    fn test_join_entry() {
        let path = AbsolutePath::resolve("/usr/local").unwrap();
        assert_eq!(path.join_entry("bin").to_string(), "/usr/local/bin");
        assert_eq!(path.join_entry("..").to_string(), "/usr");
    }
}
