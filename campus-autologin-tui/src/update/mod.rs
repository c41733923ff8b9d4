//!
//! src/update/mod.rs
//! Update 层：消费消息
//!
//! 纯界面状态（焦点、退出标志）在这里直接修改；
//! 其余消息全部转交给核心控制器，由它在 tokio 运行时上异步执行。
//! 返回的 JoinHandle 不在这里等待，主循环永远不会因为网络请求而卡住。
//!

use campus_autologin_core::FieldId;

use crate::message::AppMessage;
use crate::model::{App, FormFocus, Operator};

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::FocusNext => {
            app.focus = app.focus.next();
        }
        AppMessage::FocusPrevious => {
            app.focus = app.focus.previous();
        }
        AppMessage::Input(c) => edit_text(app, |value| value.push(c)),
        AppMessage::Backspace => edit_text(app, |value| {
            value.pop();
        }),
        AppMessage::OperatorPrevious => select_operator(app, false),
        AppMessage::OperatorNext => select_operator(app, true),
        AppMessage::ToggleAutostart => {
            let controller = app.backend.controller();
            let checked = !controller.form().read(|f| f.autostart);
            drop(controller.on_autostart_toggle(checked));
        }
        AppMessage::Activate => activate(app),
        AppMessage::LoginActivation => {
            drop(app.backend.controller().on_login_activation());
        }
        AppMessage::CloseDetail => {
            let notifications = app.backend.notifications();
            if let Some(panel) = notifications.latest_detail() {
                notifications.close_detail(panel.id);
            }
        }
        AppMessage::DismissOutside => {
            let notifications = app.backend.notifications();
            if let Some(panel) = notifications
                .details()
                .into_iter()
                .rev()
                .find(|p| p.content.dismiss_on_outside_click())
            {
                notifications.dismiss_outside(panel.id);
            }
        }
        AppMessage::ToggleRawData => {
            let details = app.backend.notifications().details();
            let visible: Vec<u64> = details.iter().map(|p| p.id).collect();
            if let Some(panel) = details.iter().rev().find(|p| p.content.raw().is_some()) {
                app.raw_sections.toggle(panel.id, &visible);
            }
        }
        AppMessage::Noop => {}
    }
}

/// 修改当前文本框的值，并作为一次输入事件交给控制器
fn edit_text(app: &App, edit: impl FnOnce(&mut String)) {
    let Some(field) = app.focus.text_field() else {
        return;
    };
    let controller = app.backend.controller();
    let mut value = controller.form().read(|f| f.value(field));
    edit(&mut value);
    controller.on_text_input(field, value);
}

fn select_operator(app: &App, forward: bool) {
    let controller = app.backend.controller();
    let current = controller.form().read(|f| f.value(FieldId::Operator));
    let next = Operator::cycle(&current, forward);
    controller.on_operator_click(next.value.to_string());
}

fn activate(app: &App) {
    let controller = app.backend.controller();
    match app.focus {
        FormFocus::Detect => {
            // 探测进行中时按钮禁用，重复点击被忽略
            if controller.on_detect_click().is_none() {
                log::debug!("Detection already running, click ignored");
            }
        }
        FormFocus::TestLogin => drop(controller.on_test_click()),
        FormFocus::Quit => drop(controller.on_quit()),
        _ => {}
    }
}
