//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::message::PaneSide;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
///
/// ```text
/// ┌ 标题栏 ─────────────────────────────────┐
/// │ 源目录  │ 目标目录  │                    │
/// ├─────────┴──────────┤      规则列表       │
/// │      输出面板       │                    │
/// └ 状态栏 ─────────────────────────────────┘
/// ```
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右各占一半
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    // 左侧：上方两个目录面板，下方输出面板
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(left[0]);

    components::pane::render(app, PaneSide::Source, frame, panes[0]);
    components::pane::render(app, PaneSide::Destination, frame, panes[1]);
    components::output::render(app, frame, left[1]);

    // 右侧：规则列表
    components::rules::render(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
