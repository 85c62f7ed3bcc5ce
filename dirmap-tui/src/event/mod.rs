//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件翻译成 AppMessage：
//!     mod handler;        // 全局拦截 + 按焦点分发
//!     mod keymap;         // 快捷键定义
//!
//!     按键                         焦点            消息
//!     ─────────────────────────────────────────────────────────────
//!     F10 / Ctrl+C                 任意            AppMessage::Quit
//!     Tab                          任意            AppMessage::CycleFocus
//!     F9                           任意            AppMessage::Run
//!     ↑↓ k j Home End Enter        目录面板        AppMessage::Pane(..)
//!     F1 / F2 / ↓                  规则面板        RuleMessage::AddSlot / DeleteSlot / CycleFocusDown
//!     字符 Enter Backspace ...     规则面板        RuleMessage::Input(..) 等
//!
//!     全局快捷键先于焦点区域处理；其余按键原样交给焦点区域，全局层不再解析。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, next_event};
