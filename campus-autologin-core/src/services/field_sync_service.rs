//! 字段防抖同步服务
//!
//! 用户在五个字段上的任何活动都会重置静默期；静默期结束后，
//! 读取全部字段的当前值并整体写入存储。

use std::sync::Arc;
use std::time::Duration;

use crate::services::{DebounceTimer, ServiceContext};
use crate::types::FieldId;

/// 默认静默期
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// 字段防抖同步服务
pub struct FieldSyncService {
    ctx: Arc<ServiceContext>,
    timer: DebounceTimer,
    quiet_period: Duration,
}

impl FieldSyncService {
    /// 创建字段同步服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, quiet_period: Duration) -> Self {
        Self {
            ctx,
            timer: DebounceTimer::new(),
            quiet_period,
        }
    }

    /// 记录一次字段活动，重新计时
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn on_field_activity(&self, field: FieldId) {
        log::trace!("field activity on {}", field.key());
        let ctx = Arc::clone(&self.ctx);
        self.timer.reschedule(self.quiet_period, async move {
            commit(&ctx).await;
        });
    }

    /// 立即提交（不影响已计划的防抖提交）
    pub async fn commit_now(&self) {
        commit(&self.ctx).await;
    }

    /// 退出前冲刷：若有等待中的防抖提交，取消它并立即提交
    ///
    /// 返回是否真的提交了一次。
    pub async fn flush(&self) -> bool {
        if !self.timer.is_pending() {
            return false;
        }
        self.timer.cancel();
        log::debug!("flushing pending settings commit");
        commit(&self.ctx).await;
        true
    }

    /// 是否有尚未触发的提交
    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.timer.is_pending()
    }
}

/// 读取表单当前值并写入；失败只记录日志，不重试
async fn commit(ctx: &ServiceContext) {
    let record = ctx.form.snapshot();
    if let Err(e) = ctx.settings_store.save(&record).await {
        ctx.log_failure("Failed to save settings", &e);
    }
}
