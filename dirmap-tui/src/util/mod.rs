//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务无关的代码：
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 日志输出到文件
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲与回显，每个按键立即生效
//!         - Ctrl+C 不再产生中断信号，由 event 层自行处理
//!
//!     · Alternate Screen（备用屏幕）
//!         - 退出后恢复主屏幕内容
//!
//!     因为终端被 TUI 占用，日志不能写到 stdout/stderr，
//!     只能写到数据目录下的 dirmap.log。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
