//! Network access engine abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::NetworkStatus;

/// Network probing / login engine.
///
/// The controller only interprets the return shape; how connectivity is
/// tested or a login page is found is up to the implementation.
#[async_trait]
pub trait NetworkAccess: Send + Sync {
    /// Run a connectivity test and return a human readable report
    async fn test_connectivity(&self) -> CoreResult<String>;

    /// Log in with the persisted credentials
    ///
    /// Fails with `AuthError` or `NetworkError`.
    async fn perform_login(&self) -> CoreResult<()>;

    /// Locate the campus login page and return its URL
    ///
    /// Fails with `DetectionError`.
    async fn detect_login_page(&self) -> CoreResult<String>;

    /// Query the current network state
    async fn get_network_status(&self) -> CoreResult<NetworkStatus>;
}
