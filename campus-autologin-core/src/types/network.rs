//! Network status reported by the network access engine

use serde::{Deserialize, Serialize};

/// Result of a status / detection query.
///
/// Produced by one action, rendered once, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub connected: bool,
    pub connectivity_result: String,
    pub needs_authentication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_error: Option<String>,
}

/// The single branch a status renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusNarrative<'a> {
    Connected,
    NeedsAuthentication { login_url: &'a str },
    DetectionFailed { error: &'a str },
    Unknown,
}

impl NetworkStatus {
    /// Pick the narrative: connected first, then a usable login URL, then the
    /// detection error.
    #[must_use]
    pub fn narrative(&self) -> StatusNarrative<'_> {
        if self.connected {
            return StatusNarrative::Connected;
        }
        if self.needs_authentication {
            if let Some(url) = self.login_url.as_deref() {
                return StatusNarrative::NeedsAuthentication { login_url: url };
            }
        }
        match self.detection_error.as_deref() {
            Some(error) => StatusNarrative::DetectionFailed { error },
            None => StatusNarrative::Unknown,
        }
    }

    /// Body of the status panel: the connectivity result first, then the
    /// login page or detection error line.
    #[must_use]
    pub fn summary(&self) -> String {
        let headline = match (self.connectivity_result.trim(), self.connected) {
            ("", true) => "Connected to the internet",
            ("", false) => "Not connected",
            (result, _) => result,
        };
        match self.narrative() {
            StatusNarrative::Connected | StatusNarrative::Unknown => headline.to_string(),
            StatusNarrative::NeedsAuthentication { login_url } => {
                format!("{headline}\nLogin page: {login_url}")
            }
            StatusNarrative::DetectionFailed { error } => {
                format!("{headline}\nDetection failed: {error}")
            }
        }
    }

    /// Pretty JSON shown in the collapsible raw-data section.
    #[must_use]
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}
