#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and `AppState` startup sequence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use campus_autologin_app::adapters::JsonSettingsStore;
use campus_autologin_app::{AppConfig, AppStateBuilder};
use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::{
    AppLifecycle, AutostartManager, ControllerTimings, FieldId, NetworkAccess, NetworkStatus,
};

// ===== Mock Implementations =====

#[derive(Default)]
struct CountingNetwork {
    login_calls: AtomicUsize,
}

#[async_trait]
impl NetworkAccess for CountingNetwork {
    async fn test_connectivity(&self) -> CoreResult<String> {
        Ok("OK: 200".to_string())
    }

    async fn perform_login(&self) -> CoreResult<()> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn detect_login_page(&self) -> CoreResult<String> {
        Err(CoreError::DetectionError("no portal".to_string()))
    }

    async fn get_network_status(&self) -> CoreResult<NetworkStatus> {
        Ok(NetworkStatus::default())
    }
}

#[derive(Default)]
struct NoopAutostart;

#[async_trait]
impl AutostartManager for NoopAutostart {
    async fn enable(&self) -> CoreResult<()> {
        Ok(())
    }

    async fn disable(&self) -> CoreResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct NoopLifecycle;

#[async_trait]
impl AppLifecycle for NoopLifecycle {
    async fn quit(&self) -> CoreResult<()> {
        Ok(())
    }
}

fn fast_timings() -> ControllerTimings {
    ControllerTimings {
        quiet_period: Duration::from_millis(20),
        ..ControllerTimings::default()
    }
}

// ===== Tests =====

#[test]
fn test_build_requires_settings_store() {
    let result = AppStateBuilder::new()
        .network(Arc::new(CountingNetwork::default()))
        .autostart(Arc::new(NoopAutostart))
        .lifecycle(Arc::new(NoopLifecycle))
        .build();

    match result {
        Err(CoreError::ValidationError(msg)) => assert!(msg.contains("settings_store")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("build should fail without a settings store"),
    }
}

#[test]
fn test_build_requires_lifecycle() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let result = AppStateBuilder::new()
        .settings_store(Arc::new(JsonSettingsStore::new(tmp.path().join("data.json"))))
        .network(Arc::new(CountingNetwork::default()))
        .autostart(Arc::new(NoopAutostart))
        .build();

    assert!(matches!(result, Err(CoreError::ValidationError(msg)) if msg.contains("lifecycle")));
}

#[tokio::test]
async fn test_startup_restores_settings_and_triggers_autostart_login() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("data.json");
    std::fs::write(
        &path,
        r#"{"webindex":"http://portal","countindex":"123","passwordindex":"pw","operatorindex":"CT","autostartindex":"true"}"#,
    )
    .unwrap();

    let network = Arc::new(CountingNetwork::default());
    let state = AppStateBuilder::from_config(&AppConfig::default())
        .settings_store(Arc::new(JsonSettingsStore::new(&path)))
        .network(network.clone())
        .autostart(Arc::new(NoopAutostart))
        .lifecycle(Arc::new(NoopLifecycle))
        .build()
        .unwrap();

    let report = state.run_startup().await;
    assert!(report.loaded);
    report.autostart_login.unwrap().await.unwrap();

    let form = state.controller.form_state();
    assert_eq!(form.web, "http://portal");
    assert_eq!(form.count, "123");
    assert_eq!(form.password, "pw");
    assert_eq!(form.operator, "CT");
    assert!(form.autostart);
    assert_eq!(network.login_calls.load(Ordering::SeqCst), 1);

    let toasts = state.notifications.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].text, "Auto login triggered");
}

#[tokio::test]
async fn test_missing_settings_file_starts_empty_without_login() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let network = Arc::new(CountingNetwork::default());
    let state = AppStateBuilder::new()
        .settings_store(Arc::new(JsonSettingsStore::new(tmp.path().join("data.json"))))
        .network(network.clone())
        .autostart(Arc::new(NoopAutostart))
        .lifecycle(Arc::new(NoopLifecycle))
        .build()
        .unwrap();

    let report = state.run_startup().await;

    assert!(report.loaded);
    assert!(report.autostart_login.is_none());
    assert_eq!(state.controller.form_state().web, "");
    assert_eq!(network.login_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_edits_are_written_to_disk_after_quiet_period() {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("nested").join("data.json");
    let state = AppStateBuilder::new()
        .settings_store(Arc::new(JsonSettingsStore::new(&path)))
        .network(Arc::new(CountingNetwork::default()))
        .autostart(Arc::new(NoopAutostart))
        .lifecycle(Arc::new(NoopLifecycle))
        .timings(fast_timings())
        .build()
        .unwrap();

    state
        .controller
        .on_text_input(FieldId::Web, "http://10.0.0.1/login".to_string());
    state
        .controller
        .on_text_input(FieldId::Count, "20230001".to_string());
    state.controller.on_operator_click("b".to_string());
    tokio::time::sleep(Duration::from_millis(300)).await;

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    assert_eq!(obj["webindex"], "http://10.0.0.1/login");
    assert_eq!(obj["countindex"], "20230001");
    assert_eq!(obj["passwordindex"], "");
    assert_eq!(obj["operatorindex"], "b");
    assert_eq!(obj["autostartindex"], "false");
}
