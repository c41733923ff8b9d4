//! 业务逻辑服务层

mod autostart_bridge;
mod debounce;
mod field_sync_service;
mod network_action_service;
mod notification_center;
mod settings_loader_service;

pub use autostart_bridge::AutostartBridgeService;
pub use debounce::DebounceTimer;
pub use field_sync_service::{FieldSyncService, DEFAULT_QUIET_PERIOD};
pub use network_action_service::{
    DetectBusyGuard, NetworkActionService, DEFAULT_RESULT_DETAIL_TTL, DEFAULT_STATUS_DETAIL_TTL,
};
pub use notification_center::{DetailPanel, NotificationCenter, Toast, DEFAULT_TOAST_TTL};
pub use settings_loader_service::{LoadReport, SettingsLoaderService};

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::{AutostartManager, LogSink, NetworkAccess, NotificationSink, SettingsStore};
use crate::types::SharedForm;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ServiceContext {
    /// 设置存储
    pub settings_store: Arc<dyn SettingsStore>,
    /// 网络探测 / 登录引擎
    pub network: Arc<dyn NetworkAccess>,
    /// 开机自启动
    pub autostart: Arc<dyn AutostartManager>,
    /// 通知展示
    pub notifier: Arc<dyn NotificationSink>,
    /// 诊断日志
    pub logger: Arc<dyn LogSink>,
    /// 表单实时状态
    pub form: SharedForm,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        settings_store: Arc<dyn SettingsStore>,
        network: Arc<dyn NetworkAccess>,
        autostart: Arc<dyn AutostartManager>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn LogSink>,
        form: SharedForm,
    ) -> Self {
        Self {
            settings_store,
            network,
            autostart,
            notifier,
            logger,
            form,
        }
    }

    /// 按错误类别（warn / error）记录失败
    pub fn log_failure(&self, context: &str, error: &CoreError) {
        self.logger
            .log(error.log_level(), &format!("{context}: {error}"));
    }
}
