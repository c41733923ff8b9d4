//! Platform-agnostic application bootstrap for Campus Autologin.
//!
//! Provides `AppState` (controller container), `AppStateBuilder` (adapter
//! injection), `AppConfig` (TOML configuration) and the concrete adapters.

pub mod adapters;
pub mod config;

use std::sync::Arc;

use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::services::LoadReport;
use campus_autologin_core::{
    AppLifecycle, AutostartManager, ControllerTimings, LogCrateSink, LogSink, NetworkAccess,
    NotificationCenter, ServiceContext, SettingsController, SettingsStore, SharedForm,
};

pub use config::AppConfig;

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all collaborator adapters)
    pub ctx: Arc<ServiceContext>,
    /// UI entry points
    pub controller: SettingsController,
    /// Visible toasts and detail panels
    pub notifications: NotificationCenter,
}

impl AppState {
    /// Run the startup sequence: load settings into the form, possibly kicking
    /// off the autostart login in the background.
    pub async fn run_startup(&self) -> LoadReport {
        let report = self.controller.start().await;
        if report.loaded {
            log::info!(
                "Settings restored (autostart login: {})",
                if report.autostart_login.is_some() {
                    "triggered"
                } else {
                    "off"
                }
            );
        } else {
            log::warn!("Settings could not be restored, starting with defaults");
        }
        report
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `settings_store`: where the five fields are persisted
/// - `network`: probing / login engine
/// - `autostart`: OS launch-at-login integration
/// - `lifecycle`: host application exit
///
/// # Optional
/// - `logger`: defaults to `LogCrateSink`
/// - `notifications`: defaults to a `NotificationCenter` with the default toast TTL
/// - `timings`: defaults to `ControllerTimings::default()`
pub struct AppStateBuilder {
    settings_store: Option<Arc<dyn SettingsStore>>,
    network: Option<Arc<dyn NetworkAccess>>,
    autostart: Option<Arc<dyn AutostartManager>>,
    lifecycle: Option<Arc<dyn AppLifecycle>>,
    logger: Option<Arc<dyn LogSink>>,
    notifications: Option<NotificationCenter>,
    timings: ControllerTimings,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings_store: None,
            network: None,
            autostart: None,
            lifecycle: None,
            logger: None,
            notifications: None,
            timings: ControllerTimings::default(),
        }
    }

    /// Start from a configuration: timings and toast TTL come from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .timings(config.controller_timings())
            .notifications(NotificationCenter::new(config.toast_ttl()))
    }

    #[must_use]
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    #[must_use]
    pub fn network(mut self, network: Arc<dyn NetworkAccess>) -> Self {
        self.network = Some(network);
        self
    }

    #[must_use]
    pub fn autostart(mut self, autostart: Arc<dyn AutostartManager>) -> Self {
        self.autostart = Some(autostart);
        self
    }

    #[must_use]
    pub fn lifecycle(mut self, lifecycle: Arc<dyn AppLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    #[must_use]
    pub fn notifications(mut self, notifications: NotificationCenter) -> Self {
        self.notifications = Some(notifications);
        self
    }

    #[must_use]
    pub fn timings(mut self, timings: ControllerTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let settings_store = self.settings_store.ok_or_else(|| {
            CoreError::ValidationError("settings_store is required".to_string())
        })?;
        let network = self
            .network
            .ok_or_else(|| CoreError::ValidationError("network is required".to_string()))?;
        let autostart = self
            .autostart
            .ok_or_else(|| CoreError::ValidationError("autostart is required".to_string()))?;
        let lifecycle = self
            .lifecycle
            .ok_or_else(|| CoreError::ValidationError("lifecycle is required".to_string()))?;
        let logger = self.logger.unwrap_or_else(|| Arc::new(LogCrateSink));
        let notifications = self.notifications.unwrap_or_default();

        let ctx = Arc::new(ServiceContext::new(
            settings_store,
            network,
            autostart,
            Arc::new(notifications.clone()),
            logger,
            SharedForm::default(),
        ));
        let controller = SettingsController::new(Arc::clone(&ctx), lifecycle, self.timings);

        Ok(AppState {
            ctx,
            controller,
            notifications,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
