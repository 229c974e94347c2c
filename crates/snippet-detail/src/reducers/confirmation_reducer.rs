//! Confirmation Reducer
//!
//! Opens and closes the confirmation prompt.

use crate::actions::ConfirmationAction;
use crate::state::ConfirmationState;

/// Reduce confirmation prompt state based on actions.
pub fn reduce_confirmation(
    state: Option<ConfirmationState>,
    action: &ConfirmationAction,
) -> Option<ConfirmationState> {
    match action {
        ConfirmationAction::Show(intent) => {
            log::debug!("Showing confirmation prompt: {:?}", intent);
            Some(ConfirmationState::new(intent.clone()))
        }
        ConfirmationAction::Confirm => {
            // Handled by middleware - should not reach reducer
            state
        }
        ConfirmationAction::Confirmed => {
            log::debug!("Confirmation prompt closed after confirm");
            None
        }
        ConfirmationAction::Cancel => {
            log::debug!("Cancelled confirmation prompt");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfirmationIntent;
    use snippet_client::SnippetId;

    #[test]
    fn test_show_and_cancel() {
        let intent = ConfirmationIntent::DeleteSnippet {
            id: SnippetId(1),
            name: "A".to_string(),
        };
        let state = reduce_confirmation(None, &ConfirmationAction::Show(intent.clone()));
        assert_eq!(state.as_ref().map(|s| &s.intent), Some(&intent));

        let state = reduce_confirmation(state, &ConfirmationAction::Confirm);
        assert!(state.is_some());

        assert_eq!(reduce_confirmation(state, &ConfirmationAction::Cancel), None);
    }
}
