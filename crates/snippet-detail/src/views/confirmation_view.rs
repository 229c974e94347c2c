use super::text;
use crate::state::ConfirmationState;

/// Confirmation prompt overlay
pub fn render_confirmation(confirmation: &ConfirmationState) -> String {
    let intent = &confirmation.intent;
    format!(
        concat!(
            "<div class=\"confirm-overlay show\"><div class=\"confirm-dialog\">",
            "<h3>{title}</h3>",
            "<p class=\"confirm-target\">{target}</p>",
            "<p>{question}</p>",
            "<div class=\"modal-buttons\">",
            "<button class=\"btn btn-secondary\" data-action=\"dismiss\">Cancel</button>",
            "<button class=\"btn btn-danger\" data-action=\"confirm\">{confirm}</button>",
            "</div></div></div>"
        ),
        title = intent.title(),
        target = text(confirmation.target()),
        question = intent.question(),
        confirm = intent.confirm_label(),
    )
}
