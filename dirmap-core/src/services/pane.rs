//! 可导航的目录面板

use std::path::Path;

use crate::error::{ListingError, ListingResult, NavigationError};
use crate::services::list_directories;
use crate::types::{AbsolutePath, DirectoryEntry};

/// 目录面板
///
/// 持有当前绝对路径与其目录列表。选择条目时按
/// `clean(当前路径 + "/" + 条目名)` 计算新路径，上行与下行共用同一逻辑。
#[derive(Debug, Clone)]
pub struct DirectoryPane {
    path: AbsolutePath,
    entries: Vec<DirectoryEntry>,
    title: String,
    /// 当前高亮的行
    selected: usize,
}

impl DirectoryPane {
    /// 以给定根目录创建面板
    pub fn create(root: impl AsRef<Path>) -> ListingResult<Self> {
        let root = root.as_ref();
        let path = AbsolutePath::resolve(root).map_err(|source| ListingError::NotFound {
            path: root.to_path_buf(),
            source,
        })?;
        let entries = list_directories(path.as_path())?;
        let title = path.base_name();

        log::info!("Pane opened at {path}");

        Ok(Self {
            path,
            entries,
            title,
            selected: 0,
        })
    }

    /// 选择一个条目并进入（`..` 即返回上级）
    ///
    /// 失败时面板保持原状。
    pub fn select(&mut self, entry_name: &str) -> Result<(), NavigationError> {
        let candidate = self.path.join_entry(entry_name);

        let entries = list_directories(candidate.as_path()).map_err(|source| NavigationError {
            attempted: candidate.as_path().to_path_buf(),
            source,
        })?;

        log::debug!("Pane moved {} -> {candidate}", self.path);

        self.title = candidate.base_name();
        self.path = candidate;
        self.entries = entries;
        self.selected = 0;
        Ok(())
    }

    /// 进入当前高亮的条目
    pub fn confirm(&mut self) -> Result<(), NavigationError> {
        let Some(name) = self.selected_entry().map(|entry| entry.name.clone()) else {
            return Ok(());
        };
        self.select(&name)
    }

    /// 重新读取当前目录
    pub fn refresh(&mut self) -> Result<(), NavigationError> {
        let entries = list_directories(self.path.as_path()).map_err(|source| NavigationError {
            attempted: self.path.as_path().to_path_buf(),
            source,
        })?;
        self.entries = entries;
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        Ok(())
    }

    pub fn current_path(&self) -> &AbsolutePath {
        &self.path
    }

    /// 标题：当前路径的最后一个分量
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// 获取当前高亮的条目
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.entries.get(self.selected)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.entries.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }
}
