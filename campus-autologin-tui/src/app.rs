//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,          // 决定应用是否应该退出（Ctrl+C）
//!     focus: FormFocus::Url,              // 当前焦点在哪个控件
//!     backend: Backend,                   // 控制器与通知中心
//!
//! }
//!
//! 表单内容与通知不在 App 中，而在核心库的共享状态里，
//! 异步操作（探测、登录、定时消失的通知）会在后台修改它们，
//! 主循环每一帧重新读取并渲染。
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit || 已请求退出 { break }       // Ctrl+C 或 Quit 按钮
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 调用控制器入口
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit || app.backend.quit_requested() {
            break;
        }

        // 3. 轮询事件（100ms 超时）；超时后也会重绘，让后台通知按时消失
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
