//! 目录条目类型

use serde::Serialize;

/// 父目录标记的名称
pub const PARENT_MARKER: &str = "..";

/// 目录列表中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// 显示名称（也是导航时拼接的名称）
    pub name: String,
    /// 是否为合成的父目录标记
    pub is_parent_marker: bool,
}

impl DirectoryEntry {
    /// 父目录标记
    pub fn parent_marker() -> Self {
        Self {
            name: PARENT_MARKER.to_string(),
            is_parent_marker: true,
        }
    }

    /// 子目录
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_parent_marker: false,
        }
    }
}
