//! Controls View Model
//!
//! Which triggers are available given the mode and the requests in flight.

use crate::state::{AppState, PendingOps, ViewMode};

/// Enabled flags for every control of the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsViewModel {
    pub edit: bool,
    pub cancel_edit: bool,
    pub save: bool,
    pub delete: bool,
    pub compare: bool,
    pub exit_diff: bool,
    /// Label of the save button ("Saving..." while in flight)
    pub save_label: &'static str,
}

impl ControlsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let session = &state.session;
        let mode = match state.mode.mode() {
            Some(mode) if !session.ended => mode,
            // Nothing is actionable before load or after delete
            _ => {
                return Self {
                    save_label: "Save",
                    ..Self::default()
                }
            }
        };

        let saving = session.is_pending(PendingOps::SAVE);
        let deleting = session.is_pending(PendingOps::DELETE);

        Self {
            edit: mode == ViewMode::ReadOnly && !deleting,
            cancel_edit: mode == ViewMode::Edit && !saving,
            save: mode == ViewMode::Edit && !saving,
            delete: mode == ViewMode::ReadOnly && !deleting,
            compare: matches!(mode, ViewMode::ReadOnly | ViewMode::Diff)
                && !deleting
                && !session.is_pending(PendingOps::CANDIDATES),
            exit_diff: mode == ViewMode::Diff,
            save_label: if saving { "Saving..." } else { "Save" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::snippet;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.session.snippet = Some(snippet(1, "Greeter"));
        state.mode.on_loaded();
        state
    }

    #[test]
    fn test_loading_disables_everything() {
        let vm = ControlsViewModel::from_state(&AppState::default());
        assert_eq!(
            vm,
            ControlsViewModel {
                save_label: "Save",
                ..ControlsViewModel::default()
            }
        );
    }

    #[test]
    fn test_pending_save_disables_save() {
        let mut state = loaded();
        if let Some(snippet) = state.session.snippet.clone() {
            state.mode.enter_edit(&snippet).unwrap();
        }
        assert!(ControlsViewModel::from_state(&state).save);

        state.session.pending.insert(PendingOps::SAVE);
        let vm = ControlsViewModel::from_state(&state);
        assert!(!vm.save);
        assert!(!vm.cancel_edit);
        assert_eq!(vm.save_label, "Saving...");
    }

    #[test]
    fn test_read_only_controls() {
        let mut state = loaded();
        let vm = ControlsViewModel::from_state(&state);
        assert!(vm.edit && vm.delete && vm.compare);
        assert!(!vm.save && !vm.exit_diff);

        state.session.pending.insert(PendingOps::CANDIDATES);
        assert!(!ControlsViewModel::from_state(&state).compare);

        state.session.ended = true;
        assert!(!ControlsViewModel::from_state(&state).edit);
    }
}
