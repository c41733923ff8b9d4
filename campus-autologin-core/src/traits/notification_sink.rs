//! Presentation surface for toasts and detail panels

use std::time::Duration;

use crate::types::DetailContent;

/// Where the controller sends user-visible messages.
///
/// The controller never touches presentation internals; it only calls these two
/// methods. Implementations own dismissal timing of toasts.
pub trait NotificationSink: Send + Sync {
    /// Short auto-dismissing message
    fn show_toast(&self, text: &str);

    /// Detail panel that auto-dismisses after `ttl`
    fn show_detail(&self, content: DetailContent, ttl: Duration);
}
