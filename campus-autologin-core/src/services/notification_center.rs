//! Notification center: the presentation model behind toasts and detail panels.
//!
//! Every entry owns its own dismissal timer. There is no cap on how many
//! entries may be visible at once.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::traits::NotificationSink;
use crate::types::DetailContent;

/// Default toast lifetime
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub id: u64,
    pub content: DetailContent,
}

#[derive(Debug, Default)]
struct Entries {
    next_id: u64,
    toasts: Vec<Toast>,
    details: Vec<DetailPanel>,
}

impl Entries {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// [`NotificationSink`] that keeps visible entries for a frontend to render.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: Arc<Mutex<Entries>>,
    toast_ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl NotificationCenter {
    #[must_use]
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Entries::default())),
            toast_ttl,
        }
    }

    /// Visible toasts, oldest first
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.with_entries(|e| e.toasts.clone())
    }

    /// Visible detail panels, oldest first
    #[must_use]
    pub fn details(&self) -> Vec<DetailPanel> {
        self.with_entries(|e| e.details.clone())
    }

    /// Close button on a detail panel
    pub fn close_detail(&self, id: u64) -> bool {
        self.with_entries(|e| remove_by_id(&mut e.details, id, |d| d.id))
    }

    /// Click outside a detail panel; only status panels react to it
    pub fn dismiss_outside(&self, id: u64) -> bool {
        self.with_entries(|e| {
            let dismissable = e
                .details
                .iter()
                .any(|d| d.id == id && d.content.dismiss_on_outside_click());
            dismissable && remove_by_id(&mut e.details, id, |d| d.id)
        })
    }

    /// Newest visible detail panel
    #[must_use]
    pub fn latest_detail(&self) -> Option<DetailPanel> {
        self.with_entries(|e| e.details.last().cloned())
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Remove the entry once `ttl` has elapsed.
    fn expire_after(&self, ttl: Duration, remove: impl FnOnce(&mut Entries) + Send + 'static) {
        let entries = Arc::clone(&self.entries);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(ttl).await;
                    let mut guard = entries.lock().unwrap_or_else(PoisonError::into_inner);
                    remove(&mut guard);
                });
            }
            Err(_) => log::warn!("No async runtime available, notification will not auto-dismiss"),
        }
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: u64, key: impl Fn(&T) -> u64) -> bool {
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}

impl NotificationSink for NotificationCenter {
    fn show_toast(&self, text: &str) {
        let id = self.with_entries(|e| {
            let id = e.allocate_id();
            e.toasts.push(Toast {
                id,
                text: text.to_string(),
            });
            id
        });
        self.expire_after(self.toast_ttl, move |e| {
            remove_by_id(&mut e.toasts, id, |t| t.id);
        });
    }

    fn show_detail(&self, content: DetailContent, ttl: Duration) {
        let id = self.with_entries(|e| {
            let id = e.allocate_id();
            e.details.push(DetailPanel { id, content });
            id
        });
        self.expire_after(ttl, move |e| {
            remove_by_id(&mut e.details, id, |d| d.id);
        });
    }
}
