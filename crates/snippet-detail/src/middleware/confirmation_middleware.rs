//! Confirmation Middleware
//!
//! Handles the Confirm action by extracting the intent from state, then
//! dispatching the action it stands for.

use crate::actions::{Action, ConfirmationAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ConfirmationIntent};

/// Middleware that turns a confirmed prompt into its action
pub struct ConfirmationMiddleware;

impl ConfirmationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfirmationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ConfirmationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Confirmation(ConfirmationAction::Confirm) = action {
            match &state.confirmation {
                Some(prompt) => {
                    let confirmed = match &prompt.intent {
                        ConfirmationIntent::DeleteSnippet { id, .. } => {
                            Action::Session(SessionAction::Delete(*id))
                        }
                    };

                    log::debug!("Confirmation confirmed, dispatching: {:?}", prompt.intent);
                    dispatcher.dispatch(confirmed);
                    // Dispatch Confirmed to close the prompt
                    dispatcher.dispatch(Action::Confirmation(ConfirmationAction::Confirmed));
                }
                None => log::warn!("ConfirmationMiddleware: Confirm without an open prompt"),
            }
            // Consume the Confirm action - we've dispatched what we need
            return false;
        }

        // All other actions pass through
        true
    }
}
