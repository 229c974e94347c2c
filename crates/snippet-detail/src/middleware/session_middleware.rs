//! Session Middleware
//!
//! Central middleware for all snippet service interactions:
//! - Loading the snippet
//! - Saving the edit form (after local validation)
//! - Deleting (after confirmation)
//! - Comparing against another snippet and rendering the result
//! - Listing comparison candidates
//!
//! Requests run on a tokio runtime owned by this middleware. Their results
//! come back through the dispatcher and are applied by the store in arrival
//! order. Failures are translated into notifications or redirects here, so
//! reducers only ever see state changes.

use crate::actions::{Action, ConfirmationAction, NotificationAction, PickerAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ConfirmationIntent, DiffPanel, PendingOps, Redirect};
use snippet_client::{ClientError, PageRequest, SnippetClient, SnippetId};
use snippet_config::AppConfig;
use snippet_diff_viewer::{DiffRenderer, DiffResult};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Middleware for all snippet service operations
pub struct SessionMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn SnippetClient>,
    renderer: DiffRenderer,
    /// Single page requested when the picker opens
    candidates: PageRequest,
}

impl SessionMiddleware {
    /// Create a new session middleware
    ///
    /// Fails only if the tokio runtime cannot be started.
    pub fn new(
        client: Arc<dyn SnippetClient>,
        renderer: DiffRenderer,
        config: &AppConfig,
    ) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("snippet-session")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            client,
            renderer,
            candidates: PageRequest::first(
                config.candidate_page_size,
                config.candidate_sort.clone(),
            ),
        })
    }

    /// Run `task` in the background and dispatch the action it resolves to
    fn spawn<F>(&self, dispatcher: &Dispatcher, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            dispatcher.dispatch(task.await);
        });
    }

    /// Refuse a request while one of the same kind is in flight
    fn already_pending(state: &AppState, op: PendingOps) -> bool {
        if state.session.is_pending(op) {
            log::warn!(
                "SessionMiddleware: {} already in flight, ignoring request",
                op.label()
            );
            return true;
        }
        false
    }

    fn handle_session(
        &self,
        action: &SessionAction,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        match action {
            SessionAction::Load(id) => {
                if Self::already_pending(state, PendingOps::LOAD) {
                    return false;
                }
                let id = *id;
                let client = Arc::clone(&self.client);
                log::info!("SessionMiddleware: loading snippet {}", id);
                self.spawn(dispatcher, async move {
                    match client.fetch_snippet(id).await {
                        Ok(snippet) => Action::Session(SessionAction::Loaded(Box::new(snippet))),
                        Err(e) => Action::Session(SessionAction::LoadFailed(e)),
                    }
                });
                true
            }

            SessionAction::LoadFailed(error) => {
                log::error!("SessionMiddleware: failed to load snippet: {}", error);
                if error.is_not_found() {
                    notify(
                        dispatcher,
                        NotificationAction::error("Not Found", "Snippet not found"),
                    );
                    redirect(dispatcher, Redirect::Dashboard);
                } else {
                    report(
                        dispatcher,
                        error,
                        NotificationAction::error("Error", "Failed to load snippet"),
                    );
                }
                true
            }

            SessionAction::Save => {
                if Self::already_pending(state, PendingOps::SAVE) {
                    return false;
                }
                let (Some(snippet), Some(buffer)) =
                    (state.session.snippet.as_ref(), state.mode.edit_buffer())
                else {
                    log::warn!("SessionMiddleware: save requested outside of edit mode");
                    return false;
                };

                let update = match buffer.validate() {
                    Ok(update) => update,
                    Err(e) => {
                        log::debug!("SessionMiddleware: edit form invalid: {}", e);
                        notify(dispatcher, NotificationAction::warning(e.title(), e.to_string()));
                        return false;
                    }
                };

                let id = snippet.id;
                let client = Arc::clone(&self.client);
                log::info!("SessionMiddleware: saving snippet {}", id);
                self.spawn(dispatcher, async move {
                    match client.update_snippet(id, &update).await {
                        Ok(snippet) => Action::Session(SessionAction::Saved(Box::new(snippet))),
                        Err(e) => Action::Session(SessionAction::SaveFailed(e)),
                    }
                });
                true
            }

            SessionAction::Saved(_) => {
                notify(
                    dispatcher,
                    NotificationAction::success("Saved!", "Snippet updated successfully"),
                );
                true
            }

            SessionAction::SaveFailed(error) => {
                log::error!("SessionMiddleware: failed to save snippet: {}", error);
                let notification = match error {
                    ClientError::Transport(_) | ClientError::Decode(_) => {
                        NotificationAction::error("Error", "Failed to update snippet")
                    }
                    _ => NotificationAction::error(
                        "Failed to Save",
                        error.server_message().unwrap_or("Unknown error"),
                    ),
                };
                report(dispatcher, error, notification);
                true
            }

            SessionAction::RequestDelete => {
                if Self::already_pending(state, PendingOps::DELETE) {
                    return false;
                }
                match &state.session.snippet {
                    Some(snippet) => dispatcher.dispatch(Action::Confirmation(
                        ConfirmationAction::Show(ConfirmationIntent::DeleteSnippet {
                            id: snippet.id,
                            name: snippet.name.clone(),
                        }),
                    )),
                    None => log::warn!("SessionMiddleware: delete requested before load"),
                }
                false
            }

            SessionAction::Delete(id) => {
                if Self::already_pending(state, PendingOps::DELETE) {
                    return false;
                }
                let id = *id;
                let client = Arc::clone(&self.client);
                log::info!("SessionMiddleware: deleting snippet {}", id);
                self.spawn(dispatcher, async move {
                    match client.delete_snippet(id).await {
                        Ok(()) => Action::Session(SessionAction::Deleted),
                        Err(e) => Action::Session(SessionAction::DeleteFailed(e)),
                    }
                });
                true
            }

            SessionAction::Deleted => {
                notify(
                    dispatcher,
                    NotificationAction::success("Deleted", "Snippet deleted successfully"),
                );
                redirect(dispatcher, Redirect::Dashboard);
                true
            }

            SessionAction::DeleteFailed(error) => {
                log::error!("SessionMiddleware: failed to delete snippet: {}", error);
                report(
                    dispatcher,
                    error,
                    NotificationAction::error("Error", "Failed to delete snippet"),
                );
                true
            }

            SessionAction::Compare(other_id) => self.start_compare(*other_id, state, dispatcher),

            SessionAction::CompareLoaded { token, diff } => {
                if !state.session.is_current_compare(*token) {
                    log::debug!("SessionMiddleware: discarding stale comparison {}", token);
                    return false;
                }
                let rendered = self.renderer.render(diff, state.session.language());
                let panel = DiffPanel::new(DiffResult::clone(diff), rendered);
                dispatcher.dispatch(Action::Session(SessionAction::CompareRendered {
                    token: *token,
                    panel: Box::new(panel),
                }));
                false
            }

            SessionAction::CompareFailed { token, error } => {
                if !state.session.is_current_compare(*token) {
                    log::debug!("SessionMiddleware: discarding stale comparison error {}", token);
                    return false;
                }
                log::error!("SessionMiddleware: failed to load comparison: {}", error);
                report(
                    dispatcher,
                    error,
                    NotificationAction::error("Error", "Failed to load comparison"),
                );
                true
            }

            SessionAction::Loaded(_) | SessionAction::CompareRendered { .. } => true,
        }
    }

    fn start_compare(&self, other_id: SnippetId, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Some(id) = state.session.snippet.as_ref().map(|snippet| snippet.id) else {
            log::warn!("SessionMiddleware: compare requested before load");
            return false;
        };
        if !state.mode.can_compare() {
            log::warn!(
                "SessionMiddleware: compare not available in {:?}",
                state.mode.mode()
            );
            return false;
        }

        // The reducer records this token; results carrying any other are stale
        let token = state.session.next_compare_token();
        let client = Arc::clone(&self.client);
        log::info!(
            "SessionMiddleware: comparing snippet {} to {} (token {})",
            id,
            other_id,
            token
        );
        self.spawn(dispatcher, async move {
            match client.compare_snippets(id, other_id).await {
                Ok(response) => Action::Session(SessionAction::CompareLoaded {
                    token,
                    diff: Box::new(DiffResult::from(response)),
                }),
                Err(error) => Action::Session(SessionAction::CompareFailed { token, error }),
            }
        });
        true
    }

    fn handle_picker(
        &self,
        action: &PickerAction,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) -> bool {
        match action {
            PickerAction::Open => {
                if Self::already_pending(state, PendingOps::CANDIDATES) {
                    return false;
                }
                if state.session.snippet.is_none() {
                    log::warn!("SessionMiddleware: picker requested before load");
                    return false;
                }
                if !state.mode.can_compare() {
                    log::warn!(
                        "SessionMiddleware: picker not available in {:?}",
                        state.mode.mode()
                    );
                    return false;
                }
                let request = self.candidates.clone();
                let client = Arc::clone(&self.client);
                self.spawn(dispatcher, async move {
                    match client.list_snippets(&request).await {
                        Ok(page) => Action::Picker(PickerAction::Loaded(page.content)),
                        Err(e) => Action::Picker(PickerAction::LoadFailed(e)),
                    }
                });
                true
            }

            PickerAction::Loaded(candidates) => {
                let current = state.session.snippet_id;
                if state.mode.can_compare()
                    && candidates.iter().all(|candidate| Some(candidate.id) == current) {
                    notify(
                        dispatcher,
                        NotificationAction::info(
                            "No Snippets",
                            "You need at least one other snippet to compare",
                        ),
                    );
                }
                true
            }

            PickerAction::LoadFailed(error) => {
                log::error!("SessionMiddleware: failed to list snippets: {}", error);
                let notification = match error {
                    ClientError::Transport(_) | ClientError::Decode(_) => {
                        NotificationAction::error("Error", "Failed to load snippets")
                    }
                    _ => NotificationAction::error("Error", "Failed to load snippets for comparison"),
                };
                report(dispatcher, error, notification);
                true
            }

            PickerAction::Select(id) => {
                if !state.picker.open || !state.picker.contains(*id) {
                    log::warn!("SessionMiddleware: snippet {} is not a candidate", id);
                    return false;
                }
                dispatcher.dispatch(Action::Picker(PickerAction::Close));
                dispatcher.dispatch(Action::Session(SessionAction::Compare(*id)));
                false
            }

            PickerAction::Close => true,
        }
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if state.session.ended && action.is_core() {
            log::debug!("SessionMiddleware: snippet deleted, ignoring {:?}", action);
            return false;
        }

        match action {
            Action::Session(session_action) => {
                self.handle_session(session_action, state, dispatcher)
            }
            Action::Picker(picker_action) => self.handle_picker(picker_action, state, dispatcher),
            _ => true,
        }
    }
}

fn notify(dispatcher: &Dispatcher, notification: NotificationAction) {
    dispatcher.dispatch(Action::Notification(notification));
}

fn redirect(dispatcher: &Dispatcher, target: Redirect) {
    dispatcher.dispatch(Action::Redirect(target));
}

/// Unauthenticated requests redirect to login, everything else is reported
fn report(dispatcher: &Dispatcher, error: &ClientError, notification: NotificationAction) {
    if error.is_unauthorized() {
        redirect(dispatcher, Redirect::Login);
    } else {
        notify(dispatcher, notification);
    }
}
