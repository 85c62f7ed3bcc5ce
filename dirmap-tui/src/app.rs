//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，终端状态为：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusRegion::SourcePane,         // 焦点在源目录面板
//!     source / destination: DirectoryPane,    // 两个独立的目录面板
//!     rules: RuleListPanel,                   // 默认带一个空规则
//!     output: OutputLog,                      // 输出面板
//!     runner: NoopRunner,                     // F9 执行钩子
//! }
//!
//!
//! 主循环单线程、阻塞等待输入：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     let event = next_event()?;                      // 阻塞直到下一个输入事件
//!     let msg = handle_event(event , &app);           // 翻译为消息
//!     update::update(&mut app , msg)                  // 同步更新状态
//! }

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一个事件
        let event = event::next_event()?;

        // 4. 处理事件，获取消息
        let msg = event::handle_event(event, app);

        // 5. 更新状态
        update::update(app, msg);
    }

    Ok(())
}
