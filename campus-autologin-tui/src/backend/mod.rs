//!
//! src/backend/mod.rs
//! Backend 层：组装核心控制器
//!
//! Backend 层与 UI 完全解耦，通过 campus-autologin-core 的 `SettingsController`
//! 完成所有业务逻辑，UI 只负责把按键翻译成控制器的入口调用。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod lifecycle;      // TerminalLifecycle：退出请求 → 主循环退出
//!
//!
//!     组装流程（build）：
//!         AppConfig
//!             ├── JsonSettingsStore      设置文件 data.json
//!             ├── HttpNetworkAccess      连通性测试 / 登录 / 探测
//!             ├── DesktopAutostart       系统开机自启
//!             └── TerminalLifecycle      退出
//!                     ↓
//!         AppStateBuilder::from_config(...).build()
//!                     ↓
//!         Backend { state, quit }
//!
//!
//!     所有控制器操作都在 tokio 运行时上异步执行，主循环只读取共享状态
//!     （表单、通知中心）来渲染，从不等待它们完成。
//!

mod lifecycle;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use campus_autologin_app::adapters::{
    DesktopAutostart, HttpNetworkAccess, JsonSettingsStore, ProbeSettings,
};
use campus_autologin_app::{AppConfig, AppState, AppStateBuilder};
use campus_autologin_core::{NotificationCenter, SettingsController};

pub use lifecycle::TerminalLifecycle;

/// 后端入口，持有组装好的应用状态
pub struct Backend {
    state: Arc<AppState>,
    quit: Arc<AtomicBool>,
}

impl Backend {
    /// 从已组装的状态创建（测试中可注入 mock 适配器）
    pub fn new(state: AppState, quit: Arc<AtomicBool>) -> Self {
        Self {
            state: Arc::new(state),
            quit,
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn controller(&self) -> &SettingsController {
        &self.state.controller
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.state.notifications
    }

    /// 宿主退出是否已被请求
    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }
}

/// 使用真实适配器组装后端
pub fn build(config: &AppConfig) -> Result<Backend> {
    let settings_path = config.settings_path();
    log::info!("Settings file: {}", settings_path.display());

    let store = Arc::new(JsonSettingsStore::new(settings_path));
    let network = HttpNetworkAccess::new(ProbeSettings::from(&config.probe), store.clone())
        .context("Failed to create HTTP client")?;
    let autostart =
        DesktopAutostart::for_current_user().context("Failed to resolve autostart entry")?;
    let quit = Arc::new(AtomicBool::new(false));

    let state = AppStateBuilder::from_config(config)
        .settings_store(store)
        .network(Arc::new(network))
        .autostart(Arc::new(autostart))
        .lifecycle(Arc::new(TerminalLifecycle::new(Arc::clone(&quit))))
        .build()
        .context("Failed to assemble application state")?;

    Ok(Backend::new(state, quit))
}
