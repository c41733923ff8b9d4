//! 启动时加载设置
//!
//! 读取已保存的设置并填入表单；若自启动开关为开，则在后台触发一次自动登录。

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::services::{NetworkActionService, ServiceContext};
use crate::types::ActionOutcome;

/// 加载结果
#[derive(Debug)]
pub struct LoadReport {
    /// 是否成功读取存储
    pub loaded: bool,
    /// 自动登录任务（仅当自启动开关为开时存在）
    pub autostart_login: Option<JoinHandle<ActionOutcome>>,
}

/// 设置加载服务
pub struct SettingsLoaderService {
    ctx: Arc<ServiceContext>,
    actions: Arc<NetworkActionService>,
}

impl SettingsLoaderService {
    /// 创建设置加载服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, actions: Arc<NetworkActionService>) -> Self {
        Self { ctx, actions }
    }

    /// 加载设置到表单
    ///
    /// 读取失败只记录日志，表单保持默认值；此方法本身不会失败。
    pub async fn load_settings(&self) -> LoadReport {
        let record = match self.ctx.settings_store.load().await {
            Ok(record) => record,
            Err(e) => {
                self.ctx.log_failure("Failed to load settings", &e);
                return LoadReport {
                    loaded: false,
                    autostart_login: None,
                };
            }
        };

        self.ctx.form.update(|f| f.apply(&record));
        log::debug!("Settings loaded, autostart = {}", record.autostart_enabled());

        let autostart_login = record.autostart_enabled().then(|| {
            let actions = Arc::clone(&self.actions);
            tokio::spawn(async move { actions.autostart_login().await })
        });

        LoadReport {
            loaded: true,
            autostart_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::services::field_sync_service::DEFAULT_QUIET_PERIOD;
    use crate::services::network_action_service::{
        DEFAULT_RESULT_DETAIL_TTL, DEFAULT_STATUS_DETAIL_TTL,
    };
    use crate::services::FieldSyncService;
    use crate::test_utils::{create_test_context, sample_record, TestMocks};
    use crate::types::{DetectButtonState, FormState, SettingsRecord};

    fn loader() -> (Arc<ServiceContext>, TestMocks, SettingsLoaderService) {
        let (ctx, mocks) = create_test_context();
        let sync = Arc::new(FieldSyncService::new(Arc::clone(&ctx), DEFAULT_QUIET_PERIOD));
        let actions = Arc::new(NetworkActionService::new(
            Arc::clone(&ctx),
            sync,
            DEFAULT_RESULT_DETAIL_TTL,
            DEFAULT_STATUS_DETAIL_TTL,
        ));
        let loader = SettingsLoaderService::new(Arc::clone(&ctx), actions);
        (ctx, mocks, loader)
    }

    #[tokio::test]
    async fn test_load_populates_fields_and_triggers_login() {
        let (ctx, mocks, loader) = loader();
        mocks.store.set_stored(sample_record()).await;

        let report = loader.load_settings().await;

        assert!(report.loaded);
        let form = ctx.form.state();
        assert_eq!(form.web, "http://portal");
        assert_eq!(form.count, "123");
        assert_eq!(form.password, "pw");
        assert_eq!(form.operator, "CT");
        assert!(form.autostart);

        let outcome = report.autostart_login.unwrap().await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(mocks.network.login_count(), 1);
    }

    #[tokio::test]
    async fn test_autostart_false_does_not_login() {
        let (ctx, mocks, loader) = loader();
        mocks
            .store
            .set_stored(SettingsRecord {
                autostartindex: "false".into(),
                ..sample_record()
            })
            .await;

        let report = loader.load_settings().await;
        tokio::task::yield_now().await;

        assert!(report.autostart_login.is_none());
        assert!(!ctx.form.read(|f| f.autostart));
        assert_eq!(mocks.network.login_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_autostart_key_does_not_login() {
        let (_ctx, mocks, loader) = loader();
        let record: SettingsRecord =
            serde_json::from_str(r#"{"webindex":"http://portal","countindex":"1"}"#).unwrap();
        mocks.store.set_stored(record).await;

        let report = loader.load_settings().await;
        assert!(report.autostart_login.is_none());
        assert_eq!(mocks.network.login_count(), 0);
    }

    #[tokio::test]
    async fn test_load_error_keeps_defaults() {
        let (ctx, mocks, loader) = loader();
        mocks.store.set_load_error(Some("corrupt file".into())).await;

        let report = loader.load_settings().await;

        assert!(!report.loaded);
        assert!(report.autostart_login.is_none());
        assert_eq!(ctx.form.state(), FormState::default());
        assert!(mocks.logger.contains("corrupt file"));
        assert!(mocks.notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn test_autostart_login_failure_is_toasted() {
        let (ctx, mocks, loader) = loader();
        mocks.store.set_stored(sample_record()).await;
        let err = CoreError::NetworkError("no route".into());
        mocks.network.set_login(Err(err.clone())).await;

        let report = loader.load_settings().await;
        let outcome = report.autostart_login.unwrap().await.unwrap();

        assert_eq!(outcome, ActionOutcome::Failed(err.to_string()));
        let toasts = mocks.notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].contains(&err.to_string()));
        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Idle);
    }
}
