//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::{App, FormFocus};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app.focus), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, focus: FormFocus) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) || DefaultKeymap::FOCUS_DOWN.matches(&key) {
        return AppMessage::FocusNext;
    }

    // 部分终端发送 BackTab 时不带 SHIFT 修饰
    if DefaultKeymap::FOCUS_PREVIOUS.matches(&key)
        || key.code == KeyCode::BackTab
        || DefaultKeymap::FOCUS_UP.matches(&key)
    {
        return AppMessage::FocusPrevious;
    }

    if DefaultKeymap::CLOSE_DETAIL.matches(&key) {
        return AppMessage::CloseDetail;
    }

    // 根据焦点位置处理按键
    if focus.is_text_input() {
        return handle_text_keys(key);
    }

    let msg = match focus {
        FormFocus::Operator => handle_operator_keys(&key),
        FormFocus::Autostart => handle_autostart_keys(&key),
        FormFocus::TestLogin
            if DefaultKeymap::LOGIN.matches(&key) || DefaultKeymap::LOGIN_ALT.matches(&key) =>
        {
            AppMessage::LoginActivation
        }
        _ if focus.is_button() && DefaultKeymap::CONFIRM.matches(&key) => AppMessage::Activate,
        _ => AppMessage::Noop,
    };

    if msg != AppMessage::Noop {
        return msg;
    }
    if DefaultKeymap::DISMISS_OUTSIDE.matches(&key) {
        AppMessage::DismissOutside
    } else if DefaultKeymap::TOGGLE_RAW.matches(&key) {
        AppMessage::ToggleRawData
    } else {
        AppMessage::Noop
    }
}

/// 文本框：可打印字符直接输入
fn handle_text_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            AppMessage::Input(c)
        }
        _ => AppMessage::Noop,
    }
}

fn handle_operator_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::OPTION_PREVIOUS.matches(key) {
        AppMessage::OperatorPrevious
    } else if DefaultKeymap::OPTION_NEXT.matches(key) || DefaultKeymap::CONFIRM.matches(key) {
        AppMessage::OperatorNext
    } else {
        AppMessage::Noop
    }
}

fn handle_autostart_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE.matches(key) || DefaultKeymap::CONFIRM.matches(key) {
        AppMessage::ToggleAutostart
    } else {
        AppMessage::Noop
    }
}
