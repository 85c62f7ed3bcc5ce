//! 规则面板消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMessage {
    // ========== 列表操作 ==========
    /// 末尾添加规则
    AddSlot,
    /// 删除末尾规则（仅当它有焦点）
    DeleteSlot,
    /// 焦点移到下一条规则
    CycleFocusDown,

    // ========== 文本编辑 ==========
    /// 输入字符
    Input(char),
    /// 换行
    Newline,
    /// 删除光标前字符
    Backspace,
    /// 删除光标处字符
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}
