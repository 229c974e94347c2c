//! Views
//!
//! Pure functions from state to page markup. Every piece of user or server
//! supplied text is escaped here or comes pre-escaped from a renderer.

mod confirmation_view;
mod diff_view;
mod edit_view;
mod notifications_view;
mod picker_view;
mod read_only_view;

pub use confirmation_view::render_confirmation;
pub use diff_view::render_diff;
pub use edit_view::render_edit_form;
pub use notifications_view::render_notifications;
pub use picker_view::render_picker;
pub use read_only_view::render_read_only;

use crate::state::{AppState, ModeState};
use snippet_diff_viewer::{CodeBlockRenderer, MarkdownRenderer};
use std::sync::Arc;

/// Renderers shared by all views of a page
#[derive(Clone, Default)]
pub struct PageView {
    pub code: CodeBlockRenderer,
    pub markdown: Option<Arc<dyn MarkdownRenderer>>,
}

impl PageView {
    pub fn new(code: CodeBlockRenderer, markdown: Option<Arc<dyn MarkdownRenderer>>) -> Self {
        Self { code, markdown }
    }

    /// Markup of the whole page: the active panel, overlays and notifications
    ///
    /// While loading no panel is emitted.
    pub fn render(&self, state: &AppState) -> String {
        let mut html = String::from("<main class=\"snippet-detail\">");

        match state.mode.state() {
            ModeState::Loading => {}
            ModeState::ReadOnly => html.push_str(&render_read_only(state, self)),
            ModeState::Edit(buffer) => html.push_str(&render_edit_form(state, buffer)),
            ModeState::Diff(panel) => html.push_str(&render_diff(panel)),
        }

        if state.picker.open {
            html.push_str(&render_picker(&state.picker));
        }
        if let Some(confirmation) = &state.confirmation {
            html.push_str(&render_confirmation(confirmation));
        }
        html.push_str(&render_notifications(&state.notifications));

        html.push_str("</main>");
        html
    }
}

/// Escape text content
pub(crate) fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape a double quoted attribute value
pub(crate) fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// `disabled` attribute for a control that is not available
pub(crate) fn disabled(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}
