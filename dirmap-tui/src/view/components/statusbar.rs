//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use dirmap_core::FocusRegion;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏：快捷键提示 + 当前源/目标路径
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(format!(
        "{} → {}",
        app.source.current_path(),
        app.destination.current_path()
    )));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus.current() {
        FocusRegion::SourcePane | FocusRegion::DestinationPane => {
            hints.push((keys.arrows_ud, actions.move_up_down));
            hints.push((keys.enter, actions.open));
            hints.push((keys.alt_r, actions.refresh));
        }
        FocusRegion::RuleList => {
            hints.push((keys.f1, actions.add_rule));
            hints.push((keys.f2, actions.delete_rule));
            hints.push((keys.down, actions.next_rule));
        }
    }

    hints.push((keys.f9, actions.run));
    hints.push((keys.f10, actions.quit));

    hints
}
