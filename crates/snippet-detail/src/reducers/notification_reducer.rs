//! Notification Reducer

use crate::actions::NotificationAction;
use crate::state::{Notification, NotificationLog};

/// Reduce notification state
pub fn reduce_notifications(
    mut state: NotificationLog,
    action: &NotificationAction,
) -> NotificationLog {
    match action {
        NotificationAction::Push {
            kind,
            title,
            message,
        } => {
            state.push(Notification::new(*kind, title.clone(), message.clone()));
        }
        NotificationAction::Clear => {
            state.clear();
        }
    }
    state
}
