//! Session Reducer
//!
//! Tracks the snippet of record and requests in flight. Results that no
//! longer match the session (stale compares) leave the state untouched.

use crate::actions::SessionAction;
use crate::state::{AppState, PendingOps};

pub fn reduce_session(mut state: AppState, action: &SessionAction) -> AppState {
    match action {
        SessionAction::Load(id) => {
            state.session.snippet_id = Some(*id);
            state.session.pending.insert(PendingOps::LOAD);
        }
        SessionAction::Loaded(snippet) => {
            state.session.pending.remove(PendingOps::LOAD);
            state.session.snippet_id = Some(snippet.id);
            state.session.snippet = Some(snippet.as_ref().clone());
            state.mode.on_loaded();
            log::debug!("Snippet {} loaded", snippet.id);
        }
        SessionAction::LoadFailed(_) => {
            // The page stays in LOADING, nothing is retried
            state.session.pending.remove(PendingOps::LOAD);
        }

        SessionAction::Save => {
            state.session.pending.insert(PendingOps::SAVE);
        }
        SessionAction::Saved(snippet) => {
            state.session.pending.remove(PendingOps::SAVE);
            state.session.snippet = Some(snippet.as_ref().clone());
            if let Err(e) = state.mode.finish_edit() {
                log::warn!("Save confirmed but edit form already closed: {}", e);
            }
        }
        SessionAction::SaveFailed(_) => {
            // Keep EDIT with the buffer so the user can retry
            state.session.pending.remove(PendingOps::SAVE);
        }

        SessionAction::RequestDelete => {
            // Handled by middleware - should not reach reducer
        }
        SessionAction::Delete(_) => {
            state.session.pending.insert(PendingOps::DELETE);
        }
        SessionAction::Deleted => {
            state.session.ended = true;
            state.session.pending = PendingOps::empty();
            state.confirmation = None;
            state.picker.close();
            log::info!("Snippet deleted, session ended");
        }
        SessionAction::DeleteFailed(_) => {
            state.session.pending.remove(PendingOps::DELETE);
        }

        SessionAction::Compare(_) => {
            // Supersedes any compare still in flight
            state.session.compare_token = state.session.next_compare_token();
            state.session.pending.insert(PendingOps::COMPARE);
        }
        SessionAction::CompareLoaded { .. } => {
            // Handled by middleware - should not reach reducer
        }
        SessionAction::CompareRendered { token, panel } => {
            if state.session.is_current_compare(*token) {
                state.session.pending.remove(PendingOps::COMPARE);
                if let Err(e) = state.mode.enter_diff(panel.as_ref().clone()) {
                    log::warn!("Dropping comparison: {}", e);
                }
            } else {
                log::debug!("Dropping stale comparison {}", token);
            }
        }
        SessionAction::CompareFailed { token, .. } => {
            if state.session.is_current_compare(*token) {
                state.session.pending.remove(PendingOps::COMPARE);
            }
        }
    }

    state
}
