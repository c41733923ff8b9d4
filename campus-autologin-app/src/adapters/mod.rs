//! Concrete collaborator adapters for desktop frontends.

#[cfg(feature = "desktop-autostart")]
mod desktop_autostart;
#[cfg(feature = "http-network")]
mod http_network;
#[cfg(feature = "json-store")]
mod json_settings_store;

#[cfg(feature = "desktop-autostart")]
pub use desktop_autostart::DesktopAutostart;
#[cfg(feature = "http-network")]
pub use http_network::{HttpNetworkAccess, ProbeSettings};
#[cfg(feature = "json-store")]
pub use json_settings_store::JsonSettingsStore;
