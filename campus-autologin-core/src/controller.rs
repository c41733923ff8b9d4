//! Settings screen controller
//!
//! Wires the services together and exposes one entry point per UI event.
//! Entry points are synchronous and spawn their work on the current tokio
//! runtime, so a frontend event loop never blocks on a collaborator.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::services::{
    AutostartBridgeService, DetectBusyGuard, FieldSyncService, LoadReport, NetworkActionService,
    ServiceContext, SettingsLoaderService, DEFAULT_QUIET_PERIOD, DEFAULT_RESULT_DETAIL_TTL,
    DEFAULT_STATUS_DETAIL_TTL,
};
use crate::traits::AppLifecycle;
use crate::types::{ActionOutcome, FieldId, FormState, SharedForm};

/// Timing knobs of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerTimings {
    /// Debounce quiet period before a field commit
    pub quiet_period: Duration,
    /// Lifetime of the connection test result panel
    pub result_detail_ttl: Duration,
    /// Lifetime of the network status panel
    pub status_detail_ttl: Duration,
}

impl Default for ControllerTimings {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            result_detail_ttl: DEFAULT_RESULT_DETAIL_TTL,
            status_detail_ttl: DEFAULT_STATUS_DETAIL_TTL,
        }
    }
}

#[derive(Clone)]
pub struct SettingsController {
    ctx: Arc<ServiceContext>,
    field_sync: Arc<FieldSyncService>,
    actions: Arc<NetworkActionService>,
    loader: Arc<SettingsLoaderService>,
    autostart: Arc<AutostartBridgeService>,
    lifecycle: Arc<dyn AppLifecycle>,
}

impl SettingsController {
    #[must_use]
    pub fn new(
        ctx: Arc<ServiceContext>,
        lifecycle: Arc<dyn AppLifecycle>,
        timings: ControllerTimings,
    ) -> Self {
        let field_sync = Arc::new(FieldSyncService::new(
            Arc::clone(&ctx),
            timings.quiet_period,
        ));
        let actions = Arc::new(NetworkActionService::new(
            Arc::clone(&ctx),
            Arc::clone(&field_sync),
            timings.result_detail_ttl,
            timings.status_detail_ttl,
        ));
        let loader = Arc::new(SettingsLoaderService::new(
            Arc::clone(&ctx),
            Arc::clone(&actions),
        ));
        let autostart = Arc::new(AutostartBridgeService::new(Arc::clone(&ctx)));
        Self {
            ctx,
            field_sync,
            actions,
            loader,
            autostart,
            lifecycle,
        }
    }

    /// Shared form handle for rendering
    #[must_use]
    pub fn form(&self) -> &SharedForm {
        &self.ctx.form
    }

    #[must_use]
    pub fn form_state(&self) -> FormState {
        self.ctx.form.state()
    }

    /// Load persisted settings; run once at startup.
    pub async fn start(&self) -> LoadReport {
        self.loader.load_settings().await
    }

    /// Text typed into the url, account or password field
    pub fn on_text_input(&self, field: FieldId, value: String) {
        self.ctx.form.update(|f| f.set_value(field, value));
        self.field_sync.on_field_activity(field);
    }

    /// Operator selector clicked
    pub fn on_operator_click(&self, value: String) {
        self.ctx.form.update(|f| f.operator = value);
        self.field_sync.on_field_activity(FieldId::Operator);
    }

    /// Autostart checkbox toggled
    pub fn on_autostart_toggle(&self, checked: bool) -> JoinHandle<()> {
        self.ctx.form.update(|f| f.autostart = checked);
        self.field_sync.on_field_activity(FieldId::Autostart);
        self.autostart.on_toggle(checked)
    }

    /// Primary activation of the test/login button
    pub fn on_test_click(&self) -> JoinHandle<ActionOutcome> {
        let actions = Arc::clone(&self.actions);
        tokio::spawn(async move { actions.test_connection().await })
    }

    /// Alternate activation of the test/login button
    pub fn on_login_activation(&self) -> JoinHandle<ActionOutcome> {
        let actions = Arc::clone(&self.actions);
        tokio::spawn(async move { actions.login().await })
    }

    /// Detect button clicked; ignored while a detection is already running.
    pub fn on_detect_click(&self) -> Option<JoinHandle<ActionOutcome>> {
        let busy = DetectBusyGuard::try_engage(&self.ctx.form)?;
        let actions = Arc::clone(&self.actions);
        Some(tokio::spawn(async move { actions.detect_with(busy).await }))
    }

    /// Write out an edit still waiting for its quiet period; call before the runtime shuts down.
    pub async fn flush_pending_edits(&self) -> bool {
        self.field_sync.flush().await
    }

    /// Quit control
    pub fn on_quit(&self) -> JoinHandle<()> {
        let ctx = Arc::clone(&self.ctx);
        let lifecycle = Arc::clone(&self.lifecycle);
        tokio::spawn(async move {
            if let Err(e) = lifecycle.quit().await {
                ctx.log_failure("Failed to quit", &e);
            }
        })
    }
}
