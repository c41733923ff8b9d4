//! Campus Autologin Core Library
//!
//! Provides the controller behind the settings screen of the campus network
//! login utility:
//! - Debounced persistence of the five settings fields (Field Sync)
//! - Startup reconciliation and autostart login (Settings Loader)
//! - Connectivity test, login and login-page detection (Network Actions)
//! - Auto-dismissing toasts and detail panels (Notification Center)
//! - OS autostart mirroring (Autostart Bridge)
//!
//! Every external capability (storage, network engine, OS integration, host
//! lifecycle) is abstracted behind a trait in [`traits`], so the same
//! controller runs under the terminal frontend and under tests.

pub mod controller;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use controller::{ControllerTimings, SettingsController};
pub use error::{CoreError, CoreResult};
pub use services::{NotificationCenter, ServiceContext};
pub use traits::{
    AppLifecycle, AutostartManager, LogCrateSink, LogSink, NetworkAccess, NotificationSink,
    SettingsStore,
};
pub use types::{
    ActionOutcome, DetailContent, DetectButtonState, FieldId, FormState, NetworkStatus,
    SettingsRecord, SharedForm,
};
