//! Notification Actions
//!
//! Actions for the notification log - user feedback for operations.

use crate::state::NotificationKind;

/// Actions for the notification log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    /// Push a new notification
    Push {
        kind: NotificationKind,
        title: String,
        message: String,
    },
    /// Clear all notifications
    Clear,
}

impl NotificationAction {
    /// Create a success notification action
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::push(NotificationKind::Success, title, message)
    }

    /// Create an error notification action
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::push(NotificationKind::Error, title, message)
    }

    /// Create a warning notification action
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::push(NotificationKind::Warning, title, message)
    }

    /// Create an info notification action
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::push(NotificationKind::Info, title, message)
    }

    fn push(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Push {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}
