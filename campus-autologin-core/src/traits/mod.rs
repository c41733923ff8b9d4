//! Collaborator abstraction trait definitions

mod autostart_manager;
mod lifecycle;
mod log_sink;
mod network_access;
mod notification_sink;
mod settings_store;

pub use autostart_manager::AutostartManager;
pub use lifecycle::AppLifecycle;
pub use log_sink::{LogCrateSink, LogSink};
pub use network_access::NetworkAccess;
pub use notification_sink::NotificationSink;
pub use settings_store::SettingsStore;
