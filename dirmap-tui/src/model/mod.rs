//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”，所有状态变更都通过 Update 层触发。
//!
//!     mod app;        // 主应用状态
//!     mod output;     // 输出面板
//!
//!     目录面板（DirectoryPane）、规则列表（RuleListPanel）
//!     与焦点游标（FocusCursor）直接使用 dirmap-core 中的类型。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 焦点管理（FocusCursor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     三个可获得焦点的区域，固定顺序：
//!         SourcePane → DestinationPane → RuleList → SourcePane ...
//!
//!     数据流：
//!         用户按 Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::CycleFocus
//!             ↓
//!         update/mod.rs 执行 app.focus.cycle()
//!             ↓
//!         view 层根据 app.focus 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 输出面板（OutputLog）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     带时间戳的只追加日志，超过容量时丢弃最旧的行。
//!     导航错误、执行器输出都写到这里。
//!

mod app;
mod output;

pub use app::App;
pub use output::{OutputLevel, OutputLog};
