//! Mode Reducer
//!
//! Applies panel switches requested by the user. Illegal requests are
//! logged and leave the state untouched.

use crate::actions::ModeAction;
use crate::state::{AppState, ModeError};

pub fn reduce_mode(mut state: AppState, action: &ModeAction) -> AppState {
    let result = match action {
        ModeAction::EnterEdit => match state.session.snippet.as_ref() {
            Some(snippet) => {
                let entered = state.mode.enter_edit(snippet);
                if entered.is_ok() {
                    // A comparison cannot start from the edit form
                    state.picker.close();
                }
                entered
            }
            None => Err(ModeError::NotLoaded),
        },
        ModeAction::CancelEdit => state.mode.cancel_edit().map(|_| ()),
        ModeAction::EditField { field, value } => {
            match state.mode.edit_buffer_mut() {
                Some(buffer) => *buffer.field_mut(*field) = value.clone(),
                None => log::warn!("Ignoring {:?} input outside of edit mode", field),
            }
            Ok(())
        }
        ModeAction::ExitDiff => state.mode.exit_diff(),
    };

    if let Err(e) = result {
        log::warn!("Ignoring {:?}: {}", action, e);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditField, ViewMode};
    use crate::test_support::{preview, snippet};

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.session.snippet = Some(snippet(1, "Greeter"));
        state.mode.on_loaded();
        state
    }

    #[test]
    fn test_enter_edit_before_load_is_ignored() {
        let state = reduce_mode(AppState::default(), &ModeAction::EnterEdit);
        assert!(state.mode.is_loading());
        assert_eq!(state.mode.mode(), None);
    }

    #[test]
    fn test_edit_field_and_cancel() {
        let state = reduce_mode(loaded(), &ModeAction::EnterEdit);
        let state = reduce_mode(
            state,
            &ModeAction::EditField {
                field: EditField::Tags,
                value: "a, b".to_string(),
            },
        );
        assert_eq!(
            state.mode.edit_buffer().map(|b| b.parsed_tags()),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let state = reduce_mode(state, &ModeAction::CancelEdit);
        assert_eq!(state.mode.mode(), Some(ViewMode::ReadOnly));
        assert!(state.mode.edit_buffer().is_none());
    }

    #[test]
    fn test_exit_diff_from_read_only_is_ignored() {
        let state = reduce_mode(loaded(), &ModeAction::ExitDiff);
        assert_eq!(state.mode.mode(), Some(ViewMode::ReadOnly));
    }

    #[test]
    fn test_enter_edit_closes_picker() {
        let mut state = loaded();
        state
            .picker
            .show(vec![preview(2, "Other")], Some(snippet_client::SnippetId(1)));
        assert!(state.picker.open);

        let state = reduce_mode(state, &ModeAction::EnterEdit);
        assert_eq!(state.mode.mode(), Some(ViewMode::Edit));
        assert!(!state.picker.open);
    }
}
