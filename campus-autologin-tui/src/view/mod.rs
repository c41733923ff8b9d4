//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取状态，从不修改。每一帧都从核心库的共享表单与通知中心
//! 取最新快照，所以后台任务（探测回填地址、通知到期消失）会在下一帧自然显示。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;                 // 主布局
//!         mod theme;                  // 颜色与样式
//!         mod components;
//!             form.rs                 // 表单与按钮
//!             statusbar.rs            // 底部快捷键提示
//!             notifications.rs        // 通知：右下角提示 + 居中详情面板
//!
//!
//!     ┌──────────────────────────────────────────────────┐
//!     │ Campus Autologin v0.1.0                          │  标题栏
//!     ├──────────────────────────────────────────────────┤
//!     │ ┌ Settings ────────────────────────────────────┐ │
//!     │ │  Login URL : http://...                       │ │
//!     │ │  Account   : ...                              │ │  表单
//!     │ │  ...                                          │ │
//!     │ │  [ Auto detect ]  [ Test / Login ]  [ Quit ]  │ │
//!     │ └───────────────────────────────────────────────┘ │
//!     │                                  ┌ toast ──────┐ │  通知（最上层）
//!     ├──────────────────────────────────────────────────┤
//!     │ Tab Next │ Enter Activate │ ...                  │  状态栏
//!     └──────────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
