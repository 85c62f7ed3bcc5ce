//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::F(10));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const CYCLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const RUN: KeyBinding = KeyBinding::key(KeyCode::F(9));

    // 目录面板
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));

    // 规则面板
    pub const ADD_RULE: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const DELETE_RULE: KeyBinding = KeyBinding::key(KeyCode::F(2));
    pub const NEXT_RULE: KeyBinding = KeyBinding::key(KeyCode::Down);
}
