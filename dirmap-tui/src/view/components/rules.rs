//! 规则列表组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use dirmap_core::RuleSlot;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染规则列表：每个规则一个编辑框，平分高度
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let panel_focused = app.focus.is_rule_list();
    let rules = &app.rules;

    // 焦点在容器上（没有规则获得焦点）时外框高亮
    let block = Block::default()
        .title(format!(" {} ", texts.rules.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(panel_focused && rules.focused().is_none()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if rules.is_empty() {
        let hint = Paragraph::new(Line::styled(
            format!(" {}", texts.rules.empty),
            Style::default().fg(c.muted),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    let count = u32::try_from(rules.len()).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (slot, slot_area)) in rules.slots().iter().zip(areas.iter()).enumerate() {
        let is_focused = panel_focused && rules.focused() == Some(i);
        render_slot(frame, *slot_area, i, slot, is_focused);
    }
}

fn render_slot(frame: &mut Frame, area: Rect, index: usize, slot: &RuleSlot, is_focused: bool) {
    let block = Block::default()
        .title(format!(" {} {} ", t().rules.slot_title, index + 1))
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (line, col) = slot.cursor_line_col();

    // 光标行超出可见区域时向下滚动
    let line_no = u16::try_from(line).unwrap_or(u16::MAX);
    let offset = line_no.saturating_sub(inner.height.saturating_sub(1));

    let text = Paragraph::new(slot.text())
        .style(Style::default().fg(colors().fg))
        .scroll((offset, 0));
    frame.render_widget(text, inner);

    if is_focused && inner.width > 0 && inner.height > 0 {
        let before: String = slot
            .text()
            .split('\n')
            .nth(line)
            .map(|l| l.chars().take(col).collect())
            .unwrap_or_default();
        let width = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(width.min(inner.width - 1));
        let y = inner.y + (line_no - offset);
        frame.set_cursor_position(Position::new(x, y));
    }
}
