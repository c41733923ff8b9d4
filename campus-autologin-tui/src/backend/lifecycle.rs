//! 终端宿主的退出实现

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use campus_autologin_core::{AppLifecycle, CoreResult};

/// 退出请求只设置标志位，由主循环在下一帧检查并退出
pub struct TerminalLifecycle {
    quit: Arc<AtomicBool>,
}

impl TerminalLifecycle {
    pub fn new(quit: Arc<AtomicBool>) -> Self {
        Self { quit }
    }
}

#[async_trait]
impl AppLifecycle for TerminalLifecycle {
    async fn quit(&self) -> CoreResult<()> {
        log::info!("Quit requested");
        self.quit.store(true, Ordering::SeqCst);
        Ok(())
    }
}
