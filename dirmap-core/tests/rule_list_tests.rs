#![allow(clippy::unwrap_used)]
//! Integration tests for the rule list focus model.

use dirmap_core::{FocusCursor, FocusRegion, RuleListPanel};

#[test]
fn add_three_then_delete_last() {
    let mut panel = RuleListPanel::new();
    assert_eq!(panel.len(), 1);

    panel.add_slot();
    panel.add_slot();
    panel.add_slot();
    assert_eq!(panel.len(), 4);

    assert!(panel.delete_slot());
    assert_eq!(panel.len(), 3);
}

#[test]
fn delete_with_non_last_focus_is_noop() {
    let mut panel = RuleListPanel::new();
    panel.add_slot();
    panel.add_slot();

    // 2 -> 0 -> 1
    panel.cycle_focus_down();
    panel.cycle_focus_down();
    assert_eq!(panel.focused(), Some(1));

    assert!(!panel.delete_slot());
    assert_eq!(panel.len(), 3);

    panel.cycle_focus_down();
    assert!(panel.delete_slot());
    assert_eq!(panel.len(), 2);
    assert_eq!(panel.focused(), Some(1));
}

#[test]
fn rule_text_survives_focus_changes() {
    let mut panel = RuleListPanel::new();
    for ch in "*.txt -> docs/".chars() {
        panel.focused_slot_mut().unwrap().insert_char(ch);
    }
    panel.add_slot();
    panel.cycle_focus_down();
    panel.cycle_focus_down();

    assert_eq!(panel.rules(), vec!["*.txt -> docs/".to_string(), String::new()]);
}

#[test]
fn focus_cursor_cycle_length_three() {
    let mut cursor = FocusCursor::new();
    assert_eq!(cursor.current(), FocusRegion::SourcePane);
    cursor.cycle();
    cursor.cycle();
    cursor.cycle();
    assert_eq!(cursor.current(), FocusRegion::SourcePane);
}
