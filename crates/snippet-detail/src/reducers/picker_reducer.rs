//! Picker Reducer

use crate::actions::PickerAction;
use crate::state::{AppState, PendingOps};

pub fn reduce_picker(mut state: AppState, action: &PickerAction) -> AppState {
    match action {
        PickerAction::Open => {
            state.session.pending.insert(PendingOps::CANDIDATES);
        }
        PickerAction::Loaded(candidates) => {
            state.session.pending.remove(PendingOps::CANDIDATES);
            if !state.mode.can_compare() {
                log::debug!("Candidates arrived outside of READ_ONLY/DIFF, picker stays closed");
                return state;
            }
            state
                .picker
                .show(candidates.clone(), state.session.snippet_id);
            log::debug!("{} comparison candidates", state.picker.candidates.len());
        }
        PickerAction::LoadFailed(_) => {
            state.session.pending.remove(PendingOps::CANDIDATES);
        }
        PickerAction::Select(_) => {
            // Handled by middleware - should not reach reducer
        }
        PickerAction::Close => {
            state.picker.close();
        }
    }
    state
}
