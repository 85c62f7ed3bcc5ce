//! 测试辅助

use std::fs;

use dirmap_core::NoopRunner;
use tempfile::TempDir;

use crate::model::App;

/// 构建一个源/目标都指向临时目录的 App
///
/// 目录结构：`a/`, `b/`, `c.txt`
#[allow(clippy::expect_used)]
pub fn test_app() -> (TempDir, App) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    fs::create_dir(tmp.path().join("a")).expect("failed to create dir");
    fs::create_dir(tmp.path().join("b")).expect("failed to create dir");
    fs::write(tmp.path().join("c.txt"), b"").expect("failed to create file");

    let app = App::new(tmp.path(), tmp.path(), 100, Box::new(NoopRunner))
        .expect("failed to create app");
    (tmp, app)
}
