//! Notification payloads

use super::network::NetworkStatus;

/// Content of a detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    /// Plain text result (connectivity test output)
    Result { title: String, body: String },
    /// Structured network status with a raw JSON section
    Status { title: String, status: NetworkStatus },
}

impl DetailContent {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Result { title, .. } | Self::Status { title, .. } => title,
        }
    }

    /// Body text; for status panels this is the narrative summary.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Result { body, .. } => body.clone(),
            Self::Status { status, .. } => status.summary(),
        }
    }

    /// Raw data section, only present on status panels.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        match self {
            Self::Result { .. } => None,
            Self::Status { status, .. } => Some(status.raw_json()),
        }
    }

    /// Status panels also close on a click outside of them.
    #[must_use]
    pub fn dismiss_on_outside_click(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
