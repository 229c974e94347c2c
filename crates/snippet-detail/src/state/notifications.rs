//! Notification State
//!
//! Single channel for user-visible outcomes: successes, failures and hints.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Severity of a notification (determines icon and styling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Get the emoji for this kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    /// CSS class used by the toast markup
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }
}

/// A single notification with metadata
#[derive(Debug, Clone)]
pub struct Notification {
    /// When the notification was raised
    pub timestamp: DateTime<Local>,
    pub kind: NotificationKind,
    /// Short headline, e.g. "Saved!"
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Create a new notification with current timestamp
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Notification history
#[derive(Debug, Clone)]
pub struct NotificationLog {
    /// Newest at back
    pub entries: VecDeque<Notification>,
    /// Maximum entries to keep
    pub max_history: usize,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_history(100)
    }
}

impl NotificationLog {
    pub fn with_history(max_history: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_history: max_history.max(1),
        }
    }

    /// Get the latest notification (if any)
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    /// Push a notification, trimming the oldest if over limit
    pub fn push(&mut self, notification: Notification) {
        self.entries.push_back(notification);
        if self.entries.len() > self.max_history {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}
