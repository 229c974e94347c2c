use super::text;
use crate::state::NotificationLog;

/// Toast stack, newest last
pub fn render_notifications(log: &NotificationLog) -> String {
    let toasts: String = log
        .iter()
        .map(|notification| {
            format!(
                concat!(
                    "<div class=\"toast {class}\">",
                    "<span class=\"toast-icon\">{icon}</span>",
                    "<div><div class=\"toast-title\">{title}</div>",
                    "<div class=\"toast-message\">{message}</div></div>",
                    "</div>"
                ),
                class = notification.kind.css_class(),
                icon = notification.kind.emoji(),
                title = text(&notification.title),
                message = text(&notification.message),
            )
        })
        .collect();

    format!("<div class=\"toast-container\">{}</div>", toasts)
}
