//! Confirmation Prompt State
//!
//! Out-of-band confirmation for destructive operations.

use snippet_client::SnippetId;

/// What happens when the prompt is confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationIntent {
    /// Delete the snippet
    DeleteSnippet { id: SnippetId, name: String },
}

impl ConfirmationIntent {
    /// Get the title for the prompt
    pub fn title(&self) -> &'static str {
        match self {
            Self::DeleteSnippet { .. } => "Delete Snippet",
        }
    }

    /// Get the question shown to the user
    pub fn question(&self) -> &'static str {
        match self {
            Self::DeleteSnippet { .. } => {
                "Are you sure you want to delete this snippet? This action cannot be undone."
            }
        }
    }

    /// Label of the confirming button
    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::DeleteSnippet { .. } => "Delete",
        }
    }
}

/// State for the confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationState {
    pub intent: ConfirmationIntent,
}

impl ConfirmationState {
    pub fn new(intent: ConfirmationIntent) -> Self {
        Self { intent }
    }

    /// Name of the affected snippet, for display
    pub fn target(&self) -> &str {
        match &self.intent {
            ConfirmationIntent::DeleteSnippet { name, .. } => name,
        }
    }
}
