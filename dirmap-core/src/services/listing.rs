//! 目录列表生成

use std::fs;
use std::path::Path;

use crate::error::{ListingError, ListingResult};
use crate::types::DirectoryEntry;

/// 生成目录列表：父目录标记在前，其后为所有子目录
///
/// 子目录保持文件系统枚举的原始顺序，不排序。
/// 条目类型取自条目本身（指向目录的符号链接不算目录）。
pub fn list_directories(path: &Path) -> ListingResult<Vec<DirectoryEntry>> {
    let metadata = fs::metadata(path).map_err(|source| ListingError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let read_error = |source: std::io::Error| ListingError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = vec![DirectoryEntry::parent_marker()];
    for node in fs::read_dir(path).map_err(read_error)? {
        let node = node.map_err(read_error)?;
        if node.file_type().map_err(read_error)?.is_dir() {
            entries.push(DirectoryEntry::directory(
                node.file_name().to_string_lossy().into_owned(),
            ));
        }
    }

    log::debug!(
        "Listed {} ({} subdirectories)",
        path.display(),
        entries.len() - 1
    );

    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::types::PARENT_MARKER;

    #[test]
    fn test_parent_marker_first() {
        let tree = TestTree::new(&["a"], &[]);
        let entries = list_directories(tree.path()).unwrap();
        assert_eq!(entries[0], DirectoryEntry::parent_marker());
        assert!(entries[0].is_parent_marker);
        assert_eq!(entries[0].name, PARENT_MARKER);
    }

    #[test]
    fn test_files_excluded() {
        let tree = TestTree::new(&["a", "b"], &["c.txt", "d.rs"]);
        let entries = list_directories(tree.path()).unwrap();

        let mut names: Vec<_> = entries[1..].iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
        assert!(entries[1..].iter().all(|e| !e.is_parent_marker));
    }

    #[test]
    fn test_empty_directory_has_only_marker() {
        let tree = TestTree::new(&[], &["only-a-file"]);
        let entries = list_directories(tree.path()).unwrap();
        assert_eq!(entries, vec![DirectoryEntry::parent_marker()]);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let tree = TestTree::new(&[], &[]);
        let missing = tree.path().join("nope");
        match list_directories(&missing) {
            Err(ListingError::NotFound { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let tree = TestTree::new(&[], &["c.txt"]);
        let file = tree.path().join("c.txt");
        let err = list_directories(&file).unwrap_err();
        assert!(matches!(err, ListingError::NotADirectory { .. }));
        assert!(err.is_expected());
        assert_eq!(err.path(), &file);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_skipped() {
        let tree = TestTree::new(&["real"], &[]);
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("link")).unwrap();
        let entries = list_directories(tree.path()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "real"]);
    }
}
