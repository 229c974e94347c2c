//! Comparison picker actions

use snippet_client::{ClientError, SnippetId, SnippetPreview};

/// Actions for the comparison picker
#[derive(Debug, Clone, PartialEq)]
pub enum PickerAction {
    /// Fetch candidates and open the picker (handled by middleware)
    Open,
    /// Candidates arrived
    Loaded(Vec<SnippetPreview>),
    /// Listing candidates failed
    LoadFailed(ClientError),
    /// Candidate chosen (handled by middleware)
    Select(SnippetId),
    /// Close without choosing
    Close,
}
