//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     mod pane;       // 目录面板子消息处理
//!     mod rules;      // 规则面板子消息处理
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Quit => app.should_quit = true,
//!             AppMessage::CycleFocus => app.focus.cycle(),
//!             AppMessage::Run => run_rules(app),
//!             AppMessage::Pane(side, m) => pane::update(app, side, m),
//!             AppMessage::Rules(m) => rules::update(app, m),
//!             AppMessage::Noop => {}
//!         }
//!     }
//!
//!     所有处理都同步完成，之后控制权返回主循环重新渲染。
//!

mod pane;
mod rules;

use dirmap_core::RunRequest;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::CycleFocus => {
            let region = app.focus.cycle();
            log::trace!("Focus moved to {region:?}");
        }

        AppMessage::Run => run_rules(app),

        AppMessage::Pane(side, pane_msg) => {
            pane::update(app, side, pane_msg);
        }

        AppMessage::Rules(rule_msg) => {
            rules::update(app, rule_msg);
        }

        AppMessage::Noop => {}
    }
}

/// 把两个当前路径与规则交给执行器，输出写入输出面板
fn run_rules(app: &mut App) {
    let texts = t();
    let request = RunRequest {
        source: app.source.current_path(),
        destination: app.destination.current_path(),
        rules: app.rules.rules(),
    };

    log::info!(
        "Run: {} -> {} with {} rules",
        request.source,
        request.destination,
        request.rules.len()
    );

    if let Err(e) = app.runner.run(&request, &mut app.output) {
        log::error!("Run failed: {e}");
        app.output.error(format!("{}: {e}", texts.output.run_failed));
    }
}
