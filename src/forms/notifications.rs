use std::collections::VecDeque;

use parking_lot::Mutex;
use tracing::debug;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An action completed.
    Success,
    /// An action failed.
    Error,
    /// Neutral information.
    Info,
}

/// A toast shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// Optional detail line.
    pub message: Option<String>,
}

impl Notification {
    /// A success toast.
    pub fn success(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message,
        }
    }

    /// An error toast.
    pub fn error(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message,
        }
    }
}

/// In-memory notification queue shared by the screens.
///
/// # Example
///
/// ```
/// use fund_disbursement::forms::{Notification, Notifications};
///
/// let toasts = Notifications::new();
/// toasts.push(Notification::success("Batch sent", None));
/// assert_eq!(toasts.latest().map(|n| n.title), Some("Batch sent".to_string()));
/// assert_eq!(toasts.drain().len(), 1);
/// assert!(toasts.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Notifications {
    queue: Mutex<VecDeque<Notification>>,
}

impl Notifications {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification.
    pub fn push(&self, notification: Notification) {
        debug!(kind = ?notification.kind, title = %notification.title, "Notification queued");
        self.queue.lock().push_back(notification);
    }

    /// Removes and returns every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.lock().drain(..).collect()
    }

    /// Returns the most recent notification without removing it.
    pub fn latest(&self) -> Option<Notification> {
        self.queue.lock().back().cloned()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
