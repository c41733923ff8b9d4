//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    AppLifecycle, AutostartManager, LogSink, NetworkAccess, NotificationSink, SettingsStore,
};
use crate::types::{DetailContent, NetworkStatus, SettingsRecord, SharedForm};

// ===== MockSettingsStore =====

pub struct MockSettingsStore {
    stored: RwLock<Option<SettingsRecord>>,
    saves: RwLock<Vec<SettingsRecord>>,
    /// 如果 Some，save 时返回此错误
    save_error: RwLock<Option<String>>,
    /// 如果 Some，load 时返回此错误
    load_error: RwLock<Option<String>>,
}

impl MockSettingsStore {
    pub fn new() -> Self {
        Self {
            stored: RwLock::new(None),
            saves: RwLock::new(Vec::new()),
            save_error: RwLock::new(None),
            load_error: RwLock::new(None),
        }
    }

    pub async fn set_stored(&self, record: SettingsRecord) {
        *self.stored.write().await = Some(record);
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    pub async fn set_load_error(&self, err: Option<String>) {
        *self.load_error.write().await = err;
    }

    /// 所有成功的 save 调用，按顺序
    pub async fn saves(&self) -> Vec<SettingsRecord> {
        self.saves.read().await.clone()
    }
}

#[async_trait]
impl SettingsStore for MockSettingsStore {
    async fn save(&self, record: &SettingsRecord) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::PersistenceError(msg.clone()));
        }
        self.saves.write().await.push(record.clone());
        *self.stored.write().await = Some(record.clone());
        Ok(())
    }

    async fn load(&self) -> CoreResult<SettingsRecord> {
        if let Some(ref msg) = *self.load_error.read().await {
            return Err(CoreError::PersistenceError(msg.clone()));
        }
        Ok(self.stored.read().await.clone().unwrap_or_default())
    }
}

// ===== MockNetworkAccess =====

pub struct MockNetworkAccess {
    connectivity: RwLock<CoreResult<String>>,
    login: RwLock<CoreResult<()>>,
    detect: RwLock<CoreResult<String>>,
    status: RwLock<CoreResult<NetworkStatus>>,
    /// perform_login 的模拟耗时
    login_delay: RwLock<Duration>,
    pub connectivity_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub detect_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
}

impl MockNetworkAccess {
    pub fn new() -> Self {
        Self {
            connectivity: RwLock::new(Ok("OK: 200".to_string())),
            login: RwLock::new(Ok(())),
            detect: RwLock::new(Ok("http://192.168.1.1/login".to_string())),
            status: RwLock::new(Ok(NetworkStatus {
                connected: false,
                connectivity_result: "redirected".to_string(),
                needs_authentication: true,
                login_url: Some("http://192.168.1.1/login".to_string()),
                detection_error: None,
            })),
            login_delay: RwLock::new(Duration::ZERO),
            connectivity_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            detect_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_connectivity(&self, result: CoreResult<String>) {
        *self.connectivity.write().await = result;
    }

    pub async fn set_login(&self, result: CoreResult<()>) {
        *self.login.write().await = result;
    }

    pub async fn set_detect(&self, result: CoreResult<String>) {
        *self.detect.write().await = result;
    }

    pub async fn set_status(&self, result: CoreResult<NetworkStatus>) {
        *self.status.write().await = result;
    }

    pub async fn set_login_delay(&self, delay: Duration) {
        *self.login_delay.write().await = delay;
    }

    pub fn login_count(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkAccess for MockNetworkAccess {
    async fn test_connectivity(&self) -> CoreResult<String> {
        self.connectivity_calls.fetch_add(1, Ordering::SeqCst);
        self.connectivity.read().await.clone()
    }

    async fn perform_login(&self) -> CoreResult<()> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.login_delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.login.read().await.clone()
    }

    async fn detect_login_page(&self) -> CoreResult<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detect.read().await.clone()
    }

    async fn get_network_status(&self) -> CoreResult<NetworkStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status.read().await.clone()
    }
}

// ===== MockAutostart =====

pub struct MockAutostart {
    pub enable_calls: AtomicUsize,
    pub disable_calls: AtomicUsize,
    error: RwLock<Option<String>>,
}

impl MockAutostart {
    pub fn new() -> Self {
        Self {
            enable_calls: AtomicUsize::new(0),
            disable_calls: AtomicUsize::new(0),
            error: RwLock::new(None),
        }
    }

    pub async fn set_error(&self, err: Option<String>) {
        *self.error.write().await = err;
    }

    async fn result(&self) -> CoreResult<()> {
        match *self.error.read().await {
            Some(ref msg) => Err(CoreError::SystemIntegrationError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AutostartManager for MockAutostart {
    async fn enable(&self) -> CoreResult<()> {
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
        self.result().await
    }

    async fn disable(&self) -> CoreResult<()> {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        self.result().await
    }
}

// ===== MockLifecycle =====

pub struct MockLifecycle {
    pub quit_calls: AtomicUsize,
}

impl MockLifecycle {
    pub fn new() -> Self {
        Self {
            quit_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AppLifecycle for MockLifecycle {
    async fn quit(&self) -> CoreResult<()> {
        self.quit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== RecordingLogSink =====

#[derive(Default)]
pub struct RecordingLogSink {
    entries: Mutex<Vec<(log::Level, String)>>,
}

impl RecordingLogSink {
    pub fn entries(&self) -> Vec<(log::Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|(_, msg)| msg.contains(needle))
    }
}

impl LogSink for RecordingLogSink {
    fn log(&self, level: log::Level, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}

// ===== RecordingNotificationSink =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Toast(String),
    Detail(DetailContent, Duration),
}

#[derive(Default)]
pub struct RecordingNotificationSink {
    shown: Mutex<Vec<Shown>>,
}

impl RecordingNotificationSink {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Toast(text) => Some(text),
                Shown::Detail(..) => None,
            })
            .collect()
    }

    pub fn details(&self) -> Vec<(DetailContent, Duration)> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Detail(content, ttl) => Some((content, ttl)),
                Shown::Toast(_) => None,
            })
            .collect()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn show_toast(&self, text: &str) {
        self.shown.lock().unwrap().push(Shown::Toast(text.to_string()));
    }

    fn show_detail(&self, content: DetailContent, ttl: Duration) {
        self.shown.lock().unwrap().push(Shown::Detail(content, ttl));
    }
}

// ===== 工厂方法 =====

/// 测试中持有的 mock 句柄
pub struct TestMocks {
    pub store: Arc<MockSettingsStore>,
    pub network: Arc<MockNetworkAccess>,
    pub autostart: Arc<MockAutostart>,
    pub notifier: Arc<RecordingNotificationSink>,
    pub logger: Arc<RecordingLogSink>,
    pub lifecycle: Arc<MockLifecycle>,
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (Arc<ServiceContext>, TestMocks) {
    let mocks = TestMocks {
        store: Arc::new(MockSettingsStore::new()),
        network: Arc::new(MockNetworkAccess::new()),
        autostart: Arc::new(MockAutostart::new()),
        notifier: Arc::new(RecordingNotificationSink::default()),
        logger: Arc::new(RecordingLogSink::default()),
        lifecycle: Arc::new(MockLifecycle::new()),
    };
    let ctx = Arc::new(ServiceContext::new(
        mocks.store.clone(),
        mocks.network.clone(),
        mocks.autostart.clone(),
        mocks.notifier.clone(),
        mocks.logger.clone(),
        SharedForm::default(),
    ));
    (ctx, mocks)
}

/// 典型的已保存设置
pub fn sample_record() -> SettingsRecord {
    SettingsRecord {
        webindex: "http://portal".to_string(),
        countindex: "123".to_string(),
        passwordindex: "pw".to_string(),
        operatorindex: "CT".to_string(),
        autostartindex: "true".to_string(),
    }
}
