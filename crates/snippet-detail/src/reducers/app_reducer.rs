use crate::actions::Action;
use crate::reducers::{
    confirmation_reducer, mode_reducer, notification_reducer, picker_reducer, scroll_reducer,
    session_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Session(session_action) => {
            state = session_reducer::reduce_session(state, session_action);
        }
        Action::Mode(mode_action) => {
            state = mode_reducer::reduce_mode(state, mode_action);
        }
        Action::Picker(picker_action) => {
            state = picker_reducer::reduce_picker(state, picker_action);
        }
        Action::Confirmation(confirmation_action) => {
            state.confirmation =
                confirmation_reducer::reduce_confirmation(state.confirmation, confirmation_action);
        }
        Action::Notification(notification_action) => {
            state.notifications = notification_reducer::reduce_notifications(
                state.notifications,
                notification_action,
            );
        }
        Action::Scroll(scroll_action) => {
            state.mode = scroll_reducer::reduce_scroll(state.mode, scroll_action);
        }
        Action::Redirect(target) => {
            // First redirect wins, the page is already on its way out
            if state.redirect.is_none() {
                log::info!("Redirecting to {}", target.path(&state.config));
                state.redirect = Some(*target);
            }
        }
        Action::None => {}
    }

    state
}
