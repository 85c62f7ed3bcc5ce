//! 顶层应用消息

use super::{PaneMessage, PaneSide, RuleMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个区域（源 → 目标 → 规则 → 源）
    CycleFocus,

    /// 执行规则
    Run,

    /// 目录面板消息
    Pane(PaneSide, PaneMessage),

    /// 规则面板消息
    Rules(RuleMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
