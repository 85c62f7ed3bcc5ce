//! 顶层焦点区域

use serde::Serialize;

/// 可获得键盘焦点的顶层区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FocusRegion {
    /// 源目录面板
    #[default]
    SourcePane,
    /// 目标目录面板
    DestinationPane,
    /// 规则列表面板
    RuleList,
}

impl FocusRegion {
    /// 固定的焦点循环顺序
    pub const ORDER: [FocusRegion; 3] = [
        FocusRegion::SourcePane,
        FocusRegion::DestinationPane,
        FocusRegion::RuleList,
    ];
}

/// 焦点游标：指向 [`FocusRegion::ORDER`] 中的一项，递增时回绕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusCursor {
    index: usize,
}

impl FocusCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前区域
    pub fn current(&self) -> FocusRegion {
        FocusRegion::ORDER[self.index % FocusRegion::ORDER.len()]
    }

    /// 移动到下一个区域
    pub fn cycle(&mut self) -> FocusRegion {
        self.index = (self.index + 1) % FocusRegion::ORDER.len();
        self.current()
    }

    pub fn is_source(&self) -> bool {
        self.current() == FocusRegion::SourcePane
    }

    pub fn is_destination(&self) -> bool {
        self.current() == FocusRegion::DestinationPane
    }

    pub fn is_rule_list(&self) -> bool {
        self.current() == FocusRegion::RuleList
    }
}
