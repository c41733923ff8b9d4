//! Campus Autologin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 界面状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 组装核心控制器与适配器 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     AppConfig::load()       // 先读配置，出错时终端尚未被接管，可以直接打印
//!     init_logging()          // 日志写入文件
//!     Runtime::new()          // tokio 运行时，界面主循环在其上下文中运行
//!     backend::build()        // 组装 AppState
//!     run_startup()           // 后台加载设置（可能触发自动登录）
//!     init_terminal()
//!     app::run()              // 主循环
//!     flush_pending_edits()   // 运行时关闭前写出仍在防抖中的修改
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use campus_autologin_app::AppConfig;

use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 配置与日志
    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = init_logging(&config)?;

    // 2. 异步运行时；主循环同步运行，控制器的操作在运行时上异步执行
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _runtime_guard = runtime.enter();

    // 3. 组装控制器并在后台加载设置
    let backend = backend::build(&config)?;
    let startup_state = backend.state();
    runtime.spawn(async move {
        startup_state.run_startup().await;
    });

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new(backend);
    let result = app::run(&mut terminal, &mut app);

    // 6. 写出仍在静默期内的修改，运行时一旦销毁，计划中的提交就会丢失
    if runtime.block_on(app.backend.controller().flush_pending_edits()) {
        log::info!("Saved pending settings before exit");
    }

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Campus Autologin exited");
    result
}
