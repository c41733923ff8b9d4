//! Type definitions

mod form;
mod network;
mod notification;
mod settings;

pub use form::{DetectButtonState, FormState, SharedForm};
pub use network::{NetworkStatus, StatusNarrative};
pub use notification::DetailContent;
pub use settings::{bool_to_stored, FieldId, SettingsRecord};

/// Result of one controller action, for observability only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// Stringified collaborator error
    Failed(String),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}
