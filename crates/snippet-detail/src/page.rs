//! Detail page facade
//!
//! [`DetailPage`] wires the store, middleware and views together and exposes
//! the user operations of the page. No operation returns an error or panics:
//! each one resolves to a state change, a notification or a redirect.

use crate::actions::{
    Action, ConfirmationAction, ModeAction, NotificationAction, PickerAction, ScrollAction,
    SessionAction,
};
use crate::middleware::{ConfirmationMiddleware, LoggingMiddleware, SessionMiddleware};
use crate::state::{AppState, EditField, NotificationLog, Redirect, ViewMode};
use crate::store::Store;
use crate::views::PageView;
use snippet_client::{Snippet, SnippetClient, SnippetId};
use snippet_config::AppConfig;
use snippet_diff_viewer::{
    CmarkRenderer, CodeBlockRenderer, DiffHighlighter, DiffRenderer, MarkdownRenderer, Pane,
    ScrollOffset, ScrollOutcome, SyntaxHighlighter,
};
use std::sync::Arc;
use std::time::Duration;

/// The snippet detail page
pub struct DetailPage {
    store: Store,
    view: PageView,
}

impl DetailPage {
    /// Page with syntect highlighting in the configured theme
    pub fn new(config: AppConfig, client: Arc<dyn SnippetClient>) -> std::io::Result<Self> {
        let highlighter: Arc<dyn SyntaxHighlighter> =
            Arc::new(DiffHighlighter::with_theme_name(&config.highlight_theme));
        Self::with_highlighter(config, client, Some(highlighter))
    }

    /// Page with the given highlighter, or plain escaped code when `None`
    pub fn with_highlighter(
        config: AppConfig,
        client: Arc<dyn SnippetClient>,
        highlighter: Option<Arc<dyn SyntaxHighlighter>>,
    ) -> std::io::Result<Self> {
        let (diff_renderer, code_renderer) = match highlighter {
            Some(highlighter) => (
                DiffRenderer::with_highlighter(Arc::clone(&highlighter)),
                CodeBlockRenderer::with_highlighter(highlighter),
            ),
            None => (DiffRenderer::new(), CodeBlockRenderer::new()),
        };
        let markdown: Arc<dyn MarkdownRenderer> = Arc::new(CmarkRenderer::new());

        let session = SessionMiddleware::new(client, diff_renderer, &config)?;

        let mut store = Store::new(AppState::new(config));
        // Middleware runs in this order
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(session));
        store.add_middleware(Box::new(ConfirmationMiddleware::new()));

        Ok(Self {
            store,
            view: PageView::new(code_renderer, Some(markdown)),
        })
    }

    fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    /// Fetch the snippet; the page shows nothing until it arrives
    pub fn load(&mut self, id: SnippetId) {
        self.dispatch(Action::Session(SessionAction::Load(id)));
    }

    pub fn enter_edit(&mut self) {
        self.dispatch(Action::Mode(ModeAction::EnterEdit));
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::Mode(ModeAction::CancelEdit));
    }

    /// Replace the value of one edit form field
    pub fn edit(&mut self, field: EditField, value: impl Into<String>) {
        self.dispatch(Action::Mode(ModeAction::EditField {
            field,
            value: value.into(),
        }));
    }

    pub fn save(&mut self) {
        self.dispatch(Action::Session(SessionAction::Save));
    }

    /// Open the delete confirmation prompt
    pub fn request_delete(&mut self) {
        self.dispatch(Action::Session(SessionAction::RequestDelete));
    }

    /// Confirm the open prompt
    pub fn confirm(&mut self) {
        self.dispatch(Action::Confirmation(ConfirmationAction::Confirm));
    }

    /// Dismiss the open prompt
    pub fn dismiss(&mut self) {
        self.dispatch(Action::Confirmation(ConfirmationAction::Cancel));
    }

    pub fn open_picker(&mut self) {
        self.dispatch(Action::Picker(PickerAction::Open));
    }

    pub fn close_picker(&mut self) {
        self.dispatch(Action::Picker(PickerAction::Close));
    }

    /// Choose a candidate of the open picker and compare against it
    pub fn select_candidate(&mut self, id: SnippetId) {
        self.dispatch(Action::Picker(PickerAction::Select(id)));
    }

    /// Compare against `other_id` directly
    pub fn enter_diff(&mut self, other_id: SnippetId) {
        self.dispatch(Action::Session(SessionAction::Compare(other_id)));
    }

    pub fn exit_diff(&mut self) {
        self.dispatch(Action::Mode(ModeAction::ExitDiff));
    }

    /// Report a scroll event of a diff pane
    ///
    /// Returns what the other pane must do.
    pub fn scrolled(&mut self, pane: Pane, offset: ScrollOffset) -> ScrollOutcome {
        if self.state().mode.diff().is_none() {
            return ScrollOutcome::Unchanged;
        }
        self.dispatch(Action::Scroll(ScrollAction::Scrolled { pane, offset }));
        self.state()
            .mode
            .diff()
            .and_then(|panel| panel.last_scroll)
            .unwrap_or(ScrollOutcome::Unchanged)
    }

    /// Leave for the dashboard
    pub fn back(&mut self) {
        self.dispatch(Action::Redirect(Redirect::Dashboard));
    }

    /// Raw code of the loaded snippet, for the host's clipboard
    pub fn code_to_copy(&self) -> Option<&str> {
        self.snippet().map(|snippet| snippet.content.as_str())
    }

    /// The host could not write to the clipboard
    pub fn copy_failed(&mut self) {
        self.dispatch(Action::Notification(NotificationAction::error(
            "Error",
            "Failed to copy code",
        )));
    }

    /// Apply responses that already arrived
    pub fn pump(&mut self) -> usize {
        self.store.pump()
    }

    /// Wait until no request is in flight; `false` on timeout
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        self.store.settle(timeout)
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Active mode, `None` while loading
    pub fn mode(&self) -> Option<ViewMode> {
        self.state().mode.mode()
    }

    pub fn snippet(&self) -> Option<&Snippet> {
        self.state().session.snippet.as_ref()
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.state().notifications
    }

    pub fn redirect(&self) -> Option<Redirect> {
        self.state().redirect
    }

    /// Configured path of the pending redirect
    pub fn redirect_path(&self) -> Option<&str> {
        let state = self.state();
        state.redirect.map(|target| target.path(&state.config))
    }

    /// Markup of the whole page
    pub fn render(&self) -> String {
        self.view.render(self.state())
    }
}
