//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与分发
//!         mod keymap;         // 快捷键定义
//!
//!
//!     在 src/app.rs 中，有：
//!         let msg = event::handle_event(event, app);
//!         update::update(app, msg);
//!
//!     handle_event 只负责翻译：根据当前焦点，把按键转换为 AppMessage，
//!     不修改任何状态。
//!
//!     优先级：
//!         1. 全局键（Ctrl+C、Tab、↑↓、Esc）
//!         2. 焦点所在控件的按键
//!         3. 非文本框时的 o（面板外点击）与 r（原始数据折叠）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
