//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
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

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(KeyModifiers::SHIFT, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const CLOSE_DETAIL: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const DISMISS_OUTSIDE: KeyBinding = KeyBinding::key(KeyCode::Char('o'));
    pub const TOGGLE_RAW: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // 焦点
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREVIOUS: KeyBinding = KeyBinding::shift(KeyCode::BackTab);
    pub const FOCUS_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const FOCUS_UP: KeyBinding = KeyBinding::key(KeyCode::Up);

    // 控件
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const OPTION_PREVIOUS: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const OPTION_NEXT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const LOGIN: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const LOGIN_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
}
