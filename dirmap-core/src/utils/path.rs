//! Lexical path cleaning.
//!
//! Cleaning never touches the filesystem:
//! - repeated separators collapse
//! - `.` components are dropped
//! - `..` removes the preceding normal component
//! - `..` directly under the root stays at the root
//! - the result never ends in a separator, except the root itself

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Returns the shortest path equivalent to `path` by purely lexical processing.
pub fn clean(path: &Path) -> PathBuf {
    let mut prefix: Option<OsString> = None;
    let mut rooted = false;
    let mut parts: Vec<OsString> = Vec::new();
    // 相对路径中无法再回退的 `..`
    let mut leading_parents = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str().to_os_string()),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() && !rooted {
                    leading_parents += 1;
                }
            }
            Component::Normal(name) => parts.push(name.to_os_string()),
        }
    }

    let mut cleaned = PathBuf::new();
    if let Some(prefix) = prefix {
        cleaned.push(prefix);
    }
    if rooted {
        cleaned.push(MAIN_SEPARATOR_STR);
    }
    for _ in 0..leading_parents {
        cleaned.push("..");
    }
    for part in parts {
        cleaned.push(part);
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// `clean(base + separator + name)`.
///
/// Ascent (`..`) and descent (a child name) go through this same concatenation.
pub fn join_clean(base: &Path, name: &str) -> PathBuf {
    let mut joined = base.as_os_str().to_os_string();
    joined.push(MAIN_SEPARATOR_STR);
    joined.push(name);
    clean(Path::new(&joined))
}
