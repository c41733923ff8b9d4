//! Settings persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::SettingsRecord;

/// Settings Store Trait
///
/// Platform implementation:
/// - App: `JsonSettingsStore` (`data.json` in the user data directory)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Overwrite the stored record wholesale
    ///
    /// # Arguments
    /// * `record` - all five fields
    async fn save(&self, record: &SettingsRecord) -> CoreResult<()>;

    /// Read the stored record
    ///
    /// Implementations return `CoreError::PersistenceError` when the backing
    /// storage cannot be read.
    async fn load(&self) -> CoreResult<SettingsRecord>;
}
