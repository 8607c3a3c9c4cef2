//! User Notifications
//!
//! Transient toasts raised by the editor. The presentation layer decides
//! how (and for how long) to show them.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Sink for editor notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Success, message));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Info, message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Warning, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Error, message));
    }
}

/// Collects notifications in arrival order and mirrors them to the log
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything raised so far
    pub fn all(&self) -> Vec<Notification> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.lock().ok().and_then(|e| e.last().cloned())
    }

    /// Take and clear pending notifications
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|mut e| std::mem::take(&mut *e))
            .unwrap_or_default()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!(text = %notification.message, "notify error"),
            level => tracing::debug!(?level, text = %notification.message, "notify"),
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notification);
        }
    }
}
