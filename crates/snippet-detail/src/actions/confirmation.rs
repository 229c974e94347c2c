//! Confirmation prompt actions

use crate::state::ConfirmationIntent;

/// Actions for the confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationAction {
    /// Show the prompt for the given intent
    Show(ConfirmationIntent),
    /// User confirmed - triggers intent dispatch (handled by middleware)
    Confirm,
    /// Intent has been dispatched - close the prompt (handled by reducer)
    Confirmed,
    /// Dismiss the prompt without acting
    Cancel,
}
