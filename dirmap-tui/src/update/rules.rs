//! 规则面板更新逻辑

use crate::message::RuleMessage;
use crate::model::App;

/// 处理规则面板消息
pub fn update(app: &mut App, msg: RuleMessage) {
    let rules = &mut app.rules;
    match msg {
        RuleMessage::AddSlot => rules.add_slot(),
        RuleMessage::DeleteSlot => {
            if !rules.delete_slot() {
                log::debug!("Delete ignored: focused rule is not the last one");
            }
        }
        RuleMessage::CycleFocusDown => rules.cycle_focus_down(),

        // 文本编辑作用于有焦点的规则；焦点在容器上时忽略
        edit => {
            let Some(slot) = rules.focused_slot_mut() else {
                return;
            };
            match edit {
                RuleMessage::Input(ch) => slot.insert_char(ch),
                RuleMessage::Newline => slot.insert_newline(),
                RuleMessage::Backspace => slot.backspace(),
                RuleMessage::Delete => slot.delete(),
                RuleMessage::CursorLeft => slot.move_left(),
                RuleMessage::CursorRight => slot.move_right(),
                RuleMessage::CursorHome => slot.move_line_start(),
                RuleMessage::CursorEnd => slot.move_line_end(),
                RuleMessage::AddSlot | RuleMessage::DeleteSlot | RuleMessage::CycleFocusDown => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, RuleMessage::Input(ch));
        }
    }

    #[test]
    fn test_add_three_delete_one() {
        let (_tmp, mut app) = test_app();
        for _ in 0..3 {
            update(&mut app, RuleMessage::AddSlot);
        }
        assert_eq!(app.rules.len(), 4);

        update(&mut app, RuleMessage::DeleteSlot);
        assert_eq!(app.rules.len(), 3);
    }

    #[test]
    fn test_delete_ignored_when_not_last() {
        let (_tmp, mut app) = test_app();
        update(&mut app, RuleMessage::AddSlot);
        update(&mut app, RuleMessage::CycleFocusDown);
        assert_eq!(app.rules.focused(), Some(0));

        update(&mut app, RuleMessage::DeleteSlot);
        assert_eq!(app.rules.len(), 2);
    }

    #[test]
    fn test_typing_goes_to_focused_slot() {
        let (_tmp, mut app) = test_app();
        type_text(&mut app, "ab");
        update(&mut app, RuleMessage::AddSlot);
        type_text(&mut app, "cd");
        update(&mut app, RuleMessage::Backspace);
        update(&mut app, RuleMessage::CursorHome);
        update(&mut app, RuleMessage::Input('>'));

        assert_eq!(app.rules.rules(), vec!["ab".to_string(), ">c".to_string()]);
    }

    #[test]
    fn test_typing_with_empty_panel_is_ignored() {
        let (_tmp, mut app) = test_app();
        update(&mut app, RuleMessage::DeleteSlot);
        assert!(app.rules.is_empty());

        type_text(&mut app, "lost");
        update(&mut app, RuleMessage::Newline);
        update(&mut app, RuleMessage::CycleFocusDown);
        assert!(app.rules.is_empty());
        assert_eq!(app.rules.focused(), None);
    }
}
