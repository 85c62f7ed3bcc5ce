//! 测试辅助模块
//!
//! 提供临时目录树的构建方法。

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// 临时目录树，drop 时自动清理
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// 创建包含给定子目录与文件的临时目录
    #[allow(clippy::expect_used)]
    pub fn new(dirs: &[&str], files: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for name in dirs {
            fs::create_dir_all(dir.path().join(name)).expect("failed to create dir");
        }
        for name in files {
            fs::write(dir.path().join(name), b"").expect("failed to create file");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
