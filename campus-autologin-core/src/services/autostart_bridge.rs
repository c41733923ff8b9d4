//! 自启动开关与系统自启动项的联动

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::services::ServiceContext;

/// 自启动桥接服务
///
/// 开关切换时后台调用 enable / disable，失败只记录日志，开关状态不回滚。
pub struct AutostartBridgeService {
    ctx: Arc<ServiceContext>,
}

impl AutostartBridgeService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 开关状态变更
    pub fn on_toggle(&self, checked: bool) -> JoinHandle<()> {
        let ctx = Arc::clone(&self.ctx);
        tokio::spawn(async move {
            let (result, context) = if checked {
                (ctx.autostart.enable().await, "Failed to enable autostart")
            } else {
                (ctx.autostart.disable().await, "Failed to disable autostart")
            };
            if let Err(e) = result {
                ctx.log_failure(context, &e);
            }
        })
    }
}
