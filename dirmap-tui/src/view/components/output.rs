//! 输出面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, OutputLevel};
use crate::view::theme::{colors, Styles};

/// 渲染输出面板，始终显示最新的行
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().output.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.output.is_empty() {
        return;
    }

    let lines: Vec<Line> = app
        .output
        .lines()
        .map(|line| {
            let text_style = match line.level {
                OutputLevel::Info => Style::default().fg(c.fg),
                OutputLevel::Error => Style::default().fg(c.error),
            };
            Line::from(vec![
                Span::styled(
                    format!("{} ", line.time.format("%H:%M:%S")),
                    Style::default().fg(c.muted),
                ),
                Span::styled(line.text.as_str(), text_style),
            ])
        })
        .collect();

    // 滚动到底部
    let hidden = app.output.len().saturating_sub(usize::from(inner.height));
    let offset = u16::try_from(hidden).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}
