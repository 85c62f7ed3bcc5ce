//! 目录面板消息

/// 哪一个目录面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Source,
    Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 进入高亮的目录
    Confirm,
    /// 重新读取当前目录
    Refresh,
}
