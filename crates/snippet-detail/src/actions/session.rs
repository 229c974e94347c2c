//! Session actions
//!
//! Requests against the snippet service and their outcomes.

use crate::state::DiffPanel;
use snippet_client::{ClientError, Snippet, SnippetId};
use snippet_diff_viewer::DiffResult;

/// Actions for the snippet session
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Fetch the snippet (handled by middleware)
    Load(SnippetId),
    /// Snippet arrived
    Loaded(Box<Snippet>),
    /// Fetching the snippet failed
    LoadFailed(ClientError),

    /// Validate the edit form and send it (handled by middleware)
    Save,
    /// Server confirmed the update and returned the stored record
    Saved(Box<Snippet>),
    /// Update rejected or not delivered
    SaveFailed(ClientError),

    /// Ask for confirmation before deleting (handled by middleware)
    RequestDelete,
    /// Delete the snippet; only dispatched after confirmation
    Delete(SnippetId),
    /// Snippet is gone
    Deleted,
    /// Delete rejected or not delivered
    DeleteFailed(ClientError),

    /// Compare the snippet against another one (handled by middleware)
    Compare(SnippetId),
    /// Comparison arrived for the request carrying `token`
    CompareLoaded { token: u64, diff: Box<DiffResult> },
    /// Comparison rendered and ready to be shown
    CompareRendered { token: u64, panel: Box<DiffPanel> },
    /// Comparison request failed
    CompareFailed { token: u64, error: ClientError },
}
