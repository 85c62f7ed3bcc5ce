//! 目录面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::message::PaneSide;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染一个目录面板
pub fn render(app: &App, side: PaneSide, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let pane = app.pane(side);

    let (role, is_focused) = match side {
        PaneSide::Source => (texts.panes.source, app.focus.is_source()),
        PaneSide::Destination => (texts.panes.destination, app.focus.is_destination()),
    };

    let block = Block::default()
        .title(format!(" {role}: {} ", pane.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = pane
        .entries()
        .iter()
        .map(|entry| {
            // ".." 用弱化颜色显示
            let style = if entry.is_parent_marker {
                Style::default().fg(c.muted)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(entry.name.as_str(), style)))
        })
        .collect();

    // 无焦点时仍保留高亮位置，但不加粗
    let highlight = if is_focused {
        Styles::selected()
    } else {
        Style::default().fg(c.highlight)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if pane.selected_entry().is_some() {
        state.select(Some(pane.selected()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
