//! OS autostart abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Launch-at-login integration
///
/// Both operations fail with `SystemIntegrationError`.
#[async_trait]
pub trait AutostartManager: Send + Sync {
    async fn enable(&self) -> CoreResult<()>;

    async fn disable(&self) -> CoreResult<()>;
}
