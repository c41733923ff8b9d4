//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// The `Display` form of each variant is what ends up in user-facing toasts,
/// so messages stay short and human readable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Settings store read/write failure
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// Network unreachable, request failed or timed out
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Login rejected by the portal
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// No login page could be located
    #[error("Detection error: {0}")]
    DetectionError(String),

    /// OS autostart integration failure
    #[error("System integration error: {0}")]
    SystemIntegrationError(String),

    /// Bootstrap / configuration mistakes
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (portal rejected the credentials, nothing
    /// to detect, bad config), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AuthError(_) | Self::DetectionError(_) | Self::ValidationError(_) => true,
            Self::PersistenceError(_)
            | Self::NetworkError(_)
            | Self::SystemIntegrationError(_)
            | Self::SerializationError(_) => false,
        }
    }

    /// `log` level matching [`Self::is_expected`]
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.is_expected() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_inner_message() {
        let err = CoreError::NetworkError("timeout".to_string());
        assert_eq!(err.to_string(), "Network error: timeout");
    }

    #[test]
    fn expected_errors_log_as_warn() {
        assert_eq!(
            CoreError::AuthError("bad password".into()).log_level(),
            log::Level::Warn
        );
        assert_eq!(
            CoreError::DetectionError("none".into()).log_level(),
            log::Level::Warn
        );
        assert_eq!(
            CoreError::PersistenceError("disk full".into()).log_level(),
            log::Level::Error
        );
        assert_eq!(
            CoreError::SystemIntegrationError("denied".into()).log_level(),
            log::Level::Error
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::DetectionError("no portal".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DetectionError");
        assert_eq!(json["details"], "no portal");
    }
}
