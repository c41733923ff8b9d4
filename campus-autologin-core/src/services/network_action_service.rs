//! 网络操作协调服务
//!
//! 连接测试、登录、登录页自动检测，以及启动时的自动登录。
//! 各操作互不排队、互不加锁；失败一律在操作边界内转换为提示消息。

use std::sync::Arc;
use std::time::Duration;

use crate::error::CoreError;
use crate::services::{FieldSyncService, ServiceContext};
use crate::types::{ActionOutcome, DetailContent, DetectButtonState, SharedForm};

/// 结果详情面板停留时间
pub const DEFAULT_RESULT_DETAIL_TTL: Duration = Duration::from_millis(5000);
/// 网络状态面板停留时间
pub const DEFAULT_STATUS_DETAIL_TTL: Duration = Duration::from_millis(10_000);

const TEST_DONE_TOAST: &str = "Connection test finished";
const LOGGING_IN_TOAST: &str = "Logging in...";
const DETECTING_TOAST: &str = "Detecting campus login page, please wait...";
const AUTO_LOGIN_TOAST: &str = "Auto login triggered";

/// 检测期间占用检测按钮；drop 时无论成功失败都恢复按钮
pub struct DetectBusyGuard {
    form: SharedForm,
}

impl DetectBusyGuard {
    /// 无条件进入检测状态
    #[must_use]
    pub fn engage(form: &SharedForm) -> Self {
        form.update(|f| f.detect = DetectButtonState::Detecting);
        Self { form: form.clone() }
    }

    /// 仅当按钮可用时进入检测状态
    #[must_use]
    pub fn try_engage(form: &SharedForm) -> Option<Self> {
        let engaged = form.update(|f| {
            if f.detect.enabled() {
                f.detect = DetectButtonState::Detecting;
                true
            } else {
                false
            }
        });
        engaged.then(|| Self { form: form.clone() })
    }
}

impl Drop for DetectBusyGuard {
    fn drop(&mut self) {
        self.form.update(|f| f.detect = DetectButtonState::Idle);
    }
}

/// 网络操作协调服务
pub struct NetworkActionService {
    ctx: Arc<ServiceContext>,
    field_sync: Arc<FieldSyncService>,
    result_detail_ttl: Duration,
    status_detail_ttl: Duration,
}

impl NetworkActionService {
    /// 创建网络操作服务实例
    #[must_use]
    pub fn new(
        ctx: Arc<ServiceContext>,
        field_sync: Arc<FieldSyncService>,
        result_detail_ttl: Duration,
        status_detail_ttl: Duration,
    ) -> Self {
        Self {
            ctx,
            field_sync,
            result_detail_ttl,
            status_detail_ttl,
        }
    }

    /// 连接测试
    pub async fn test_connection(&self) -> ActionOutcome {
        match self.ctx.network.test_connectivity().await {
            Ok(report) => {
                self.ctx.notifier.show_toast(TEST_DONE_TOAST);
                self.ctx.notifier.show_detail(
                    DetailContent::Result {
                        title: "Connection test result".to_string(),
                        body: report,
                    },
                    self.result_detail_ttl,
                );
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail("Connection test failed", &e),
        }
    }

    /// 使用已保存的账号登录
    pub async fn login(&self) -> ActionOutcome {
        match self.ctx.network.perform_login().await {
            Ok(()) => {
                self.ctx.notifier.show_toast(LOGGING_IN_TOAST);
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail("Login failed", &e),
        }
    }

    /// 启动时由加载器触发的自动登录
    pub async fn autostart_login(&self) -> ActionOutcome {
        match self.ctx.network.perform_login().await {
            Ok(()) => {
                self.ctx.notifier.show_toast(AUTO_LOGIN_TOAST);
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail("Auto login failed", &e),
        }
    }

    /// 自动检测登录页
    ///
    /// 检测成功后立即写入地址字段并提交（绕过防抖），再查询网络状态。
    /// 任何退出路径都会恢复检测按钮。
    pub async fn auto_detect_login_page(&self) -> ActionOutcome {
        let busy = DetectBusyGuard::engage(&self.ctx.form);
        self.detect_with(busy).await
    }

    /// 在已占用的检测按钮下执行检测
    pub async fn detect_with(&self, busy: DetectBusyGuard) -> ActionOutcome {
        let _busy = busy;
        self.ctx.notifier.show_toast(DETECTING_TOAST);

        let url = match self.ctx.network.detect_login_page().await {
            Ok(url) => url,
            Err(e) => return self.fail("Detection failed", &e),
        };

        self.ctx.form.update(|f| f.web.clone_from(&url));
        self.field_sync.commit_now().await;
        self.ctx
            .notifier
            .show_toast(&format!("Detected login page: {url}"));

        match self.ctx.network.get_network_status().await {
            Ok(status) => {
                self.ctx.notifier.show_detail(
                    DetailContent::Status {
                        title: "Network status".to_string(),
                        status,
                    },
                    self.status_detail_ttl,
                );
                ActionOutcome::Succeeded
            }
            Err(e) => self.fail("Detection failed", &e),
        }
    }

    fn fail(&self, context: &str, error: &CoreError) -> ActionOutcome {
        self.ctx.log_failure(context, error);
        self.ctx.notifier.show_toast(&format!("{context}: {error}"));
        ActionOutcome::Failed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::field_sync_service::DEFAULT_QUIET_PERIOD;
    use crate::test_utils::{create_test_context, Shown, TestMocks};
    use crate::types::NetworkStatus;

    fn service() -> (Arc<ServiceContext>, TestMocks, NetworkActionService) {
        let (ctx, mocks) = create_test_context();
        let sync = Arc::new(FieldSyncService::new(Arc::clone(&ctx), DEFAULT_QUIET_PERIOD));
        let svc = NetworkActionService::new(
            Arc::clone(&ctx),
            sync,
            DEFAULT_RESULT_DETAIL_TTL,
            DEFAULT_STATUS_DETAIL_TTL,
        );
        (ctx, mocks, svc)
    }

    fn count_containing(mocks: &TestMocks, needle: &str) -> usize {
        mocks
            .notifier
            .toasts()
            .iter()
            .filter(|t| t.contains(needle))
            .count()
    }

    #[tokio::test]
    async fn test_connection_success_shows_toast_and_result() {
        let (_ctx, mocks, svc) = service();

        let outcome = svc.test_connection().await;

        assert!(outcome.is_success());
        assert_eq!(mocks.notifier.toasts(), vec![TEST_DONE_TOAST.to_string()]);
        let details = mocks.notifier.details();
        assert_eq!(details.len(), 1);
        assert!(details[0].0.body().contains("OK: 200"));
        assert_eq!(details[0].1, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn test_connection_failure_toasts_error_once() {
        let (_ctx, mocks, svc) = service();
        let err = CoreError::NetworkError("unreachable".into());
        mocks.network.set_connectivity(Err(err.clone())).await;

        let outcome = svc.test_connection().await;

        assert_eq!(outcome, ActionOutcome::Failed(err.to_string()));
        assert_eq!(mocks.notifier.shown().len(), 1);
        assert_eq!(count_containing(&mocks, &err.to_string()), 1);
        assert!(mocks.notifier.details().is_empty());
    }

    #[tokio::test]
    async fn test_login_success_and_failure() {
        let (_ctx, mocks, svc) = service();

        assert!(svc.login().await.is_success());
        assert_eq!(mocks.notifier.toasts(), vec![LOGGING_IN_TOAST.to_string()]);

        let err = CoreError::AuthError("wrong password".into());
        mocks.network.set_login(Err(err.clone())).await;
        assert!(!svc.login().await.is_success());
        assert_eq!(count_containing(&mocks, &err.to_string()), 1);
        assert!(mocks.logger.contains("wrong password"));
        assert_eq!(mocks.logger.entries()[0].0, log::Level::Warn);
    }

    #[tokio::test]
    async fn test_autostart_login_uses_its_own_message() {
        let (_ctx, mocks, svc) = service();

        assert!(svc.autostart_login().await.is_success());
        assert_eq!(mocks.notifier.toasts(), vec![AUTO_LOGIN_TOAST.to_string()]);
        assert_eq!(mocks.network.login_count(), 1);
    }

    #[tokio::test]
    async fn test_detect_updates_url_commits_and_shows_status() {
        let (ctx, mocks, svc) = service();
        ctx.form.update(|f| f.count = "123".to_string());

        let outcome = svc.auto_detect_login_page().await;

        assert!(outcome.is_success());
        assert_eq!(ctx.form.read(|f| f.web.clone()), "http://192.168.1.1/login");

        let saves = mocks.store.saves().await;
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].webindex, "http://192.168.1.1/login");
        assert_eq!(saves[0].countindex, "123");

        let shown = mocks.notifier.shown();
        assert_eq!(shown[0], Shown::Toast(DETECTING_TOAST.to_string()));
        assert_eq!(count_containing(&mocks, "http://192.168.1.1/login"), 1);
        let details = mocks.notifier.details();
        assert_eq!(details.len(), 1);
        assert!(details[0].0.dismiss_on_outside_click());
        assert_eq!(details[0].1, Duration::from_millis(10_000));

        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Idle);
    }

    #[tokio::test]
    async fn test_detect_failure_restores_button_without_commit() {
        let (ctx, mocks, svc) = service();
        let err = CoreError::DetectionError("no portal found".into());
        mocks.network.set_detect(Err(err.clone())).await;

        let outcome = svc.auto_detect_login_page().await;

        assert!(!outcome.is_success());
        assert!(mocks.store.saves().await.is_empty());
        assert_eq!(mocks.network.status_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(count_containing(&mocks, &err.to_string()), 1);
        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Idle);
        assert_eq!(ctx.form.read(|f| f.web.clone()), "");
    }

    #[tokio::test]
    async fn test_detect_status_failure_still_restores_button() {
        let (ctx, mocks, svc) = service();
        let err = CoreError::NetworkError("status timeout".into());
        mocks.network.set_status(Err(err.clone())).await;

        let outcome = svc.auto_detect_login_page().await;

        assert!(!outcome.is_success());
        // 地址已写入并提交
        assert_eq!(mocks.store.saves().await.len(), 1);
        assert_eq!(count_containing(&mocks, &err.to_string()), 1);
        assert!(mocks.notifier.details().is_empty());
        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Idle);
    }

    #[tokio::test]
    async fn test_detect_shows_busy_state_while_in_flight() {
        let (ctx, mocks, svc) = service();
        mocks
            .network
            .set_status(Ok(NetworkStatus {
                connected: true,
                ..Default::default()
            }))
            .await;

        let busy = DetectBusyGuard::try_engage(&ctx.form).unwrap();
        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Detecting);
        assert!(DetectBusyGuard::try_engage(&ctx.form).is_none());

        svc.detect_with(busy).await;
        assert_eq!(ctx.form.read(|f| f.detect), DetectButtonState::Idle);
    }

    #[tokio::test]
    async fn test_save_failure_during_detect_is_only_logged() {
        let (_ctx, mocks, svc) = service();
        mocks.store.set_save_error(Some("read-only".into())).await;

        let outcome = svc.auto_detect_login_page().await;

        assert!(outcome.is_success());
        assert!(mocks.logger.contains("read-only"));
        assert_eq!(count_containing(&mocks, "read-only"), 0);
    }
}
