//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成 Message，Update 层消费 Message。
//!
//!     mod app;        // AppMessage：顶层消息（退出、切换焦点、执行）
//!     mod pane;       // PaneMessage：目录面板内的移动与选择
//!     mod rules;      // RuleMessage：规则列表的增删、焦点与文本编辑
//!
//!     AppMessage::Pane(PaneSide, PaneMessage) 指明消息发往哪一个目录面板，
//!     两个面板共用同一套处理逻辑。
//!

mod app;
mod pane;
mod rules;

pub use app::AppMessage;
pub use pane::{PaneMessage, PaneSide};
pub use rules::RuleMessage;
