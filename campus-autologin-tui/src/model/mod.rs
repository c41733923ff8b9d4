//!
//! src/model/mod.rs
//! Model 层：界面状态定义
//!
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 表单字段的值由核心库的 SharedForm 持有，这里只保存纯界面状态。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点（当前选中的控件）
//!         mod operator;       // 运营商选项
//!         mod raw_sections;   // 详情面板原始数据区的折叠状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、焦点管理（FormFocus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Url → Account → Password → Operator → Autostart → Detect → TestLogin → Quit
//!      ↑                                                                      │
//!      └──────────────────────────────── 循环 ─────────────────────────────────┘
//!
//!     数据流：
//!         用户按 Tab / ↓
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view 层根据 app.focus 高亮对应控件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、运营商（Operator）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     固定四个选项，存储值为单个字母：
//!         a → 校园网    b → 中国移动    c → 中国电信    d → 中国联通
//!
//!     ← / → 在选项之间循环，每次切换都相当于点击了一次单选按钮。
//!

mod app;
mod focus;
mod operator;
mod raw_sections;

pub use app::App;
pub use focus::FormFocus;
pub use operator::Operator;
pub use raw_sections::RawSections;
