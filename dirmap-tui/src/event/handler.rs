use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dirmap_core::FocusRegion;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PaneMessage, PaneSide, RuleMessage};
use crate::model::App;

/// 阻塞等待下一个输入事件
pub fn next_event() -> Result<Event> {
    Ok(event::read()?)
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 其他事件（含窗口大小改变）只触发重绘
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::CYCLE_FOCUS.matches(&key) {
        return AppMessage::CycleFocus;
    }

    if DefaultKeymap::RUN.matches(&key) {
        return AppMessage::Run;
    }

    // 根据焦点位置处理按键
    match app.focus.current() {
        FocusRegion::SourcePane => handle_pane_keys(key, PaneSide::Source),
        FocusRegion::DestinationPane => handle_pane_keys(key, PaneSide::Destination),
        FocusRegion::RuleList => handle_rule_keys(key),
    }
}

fn handle_pane_keys(key: KeyEvent, side: PaneSide) -> AppMessage {
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Pane(side, PaneMessage::Refresh);
    }

    let msg = match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => PaneMessage::SelectPrevious,
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => PaneMessage::SelectNext,
        // Home: 跳到第一项
        KeyCode::Home => PaneMessage::SelectFirst,
        // End: 跳到最后一项
        KeyCode::End => PaneMessage::SelectLast,
        // Enter: 进入目录
        KeyCode::Enter => PaneMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Pane(side, msg)
}

fn handle_rule_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ADD_RULE.matches(&key) {
        return AppMessage::Rules(RuleMessage::AddSlot);
    }
    if DefaultKeymap::DELETE_RULE.matches(&key) {
        return AppMessage::Rules(RuleMessage::DeleteSlot);
    }
    if DefaultKeymap::NEXT_RULE.matches(&key) {
        return AppMessage::Rules(RuleMessage::CycleFocusDown);
    }

    let msg = match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => RuleMessage::Input(ch),
        (_, KeyCode::Enter) => RuleMessage::Newline,
        (_, KeyCode::Backspace) => RuleMessage::Backspace,
        (_, KeyCode::Delete) => RuleMessage::Delete,
        (_, KeyCode::Left) => RuleMessage::CursorLeft,
        (_, KeyCode::Right) => RuleMessage::CursorRight,
        (_, KeyCode::Home) => RuleMessage::CursorHome,
        (_, KeyCode::End) => RuleMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };
    AppMessage::Rules(msg)
}
