//! Host application lifecycle

use async_trait::async_trait;

use crate::error::CoreResult;

/// Host application lifecycle, invoked fire-and-forget
#[async_trait]
pub trait AppLifecycle: Send + Sync {
    /// Request the host to exit
    async fn quit(&self) -> CoreResult<()>;
}
