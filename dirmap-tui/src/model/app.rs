//! 应用主状态结构

use std::path::Path;

use dirmap_core::{DirectoryPane, FocusCursor, ListingResult, RuleListPanel, RuleRunner};

use super::OutputLog;
use crate::message::PaneSide;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点区域
    pub focus: FocusCursor,

    /// 源目录面板
    pub source: DirectoryPane,

    /// 目标目录面板
    pub destination: DirectoryPane,

    /// 规则列表
    pub rules: RuleListPanel,

    /// 输出面板
    pub output: OutputLog,

    /// F9 触发的执行器
    pub runner: Box<dyn RuleRunner>,
}

impl App {
    /// 创建新的应用实例，任一面板无法打开都会失败
    pub fn new(
        source: &Path,
        destination: &Path,
        output_capacity: usize,
        runner: Box<dyn RuleRunner>,
    ) -> ListingResult<Self> {
        Ok(Self {
            should_quit: false,
            focus: FocusCursor::new(),
            source: DirectoryPane::create(source)?,
            destination: DirectoryPane::create(destination)?,
            rules: RuleListPanel::new(),
            output: OutputLog::new(output_capacity),
            runner,
        })
    }

    pub fn pane(&self, side: PaneSide) -> &DirectoryPane {
        match side {
            PaneSide::Source => &self.source,
            PaneSide::Destination => &self.destination,
        }
    }

    pub fn pane_mut(&mut self, side: PaneSide) -> &mut DirectoryPane {
        match side {
            PaneSide::Source => &mut self.source,
            PaneSide::Destination => &mut self.destination,
        }
    }
}
