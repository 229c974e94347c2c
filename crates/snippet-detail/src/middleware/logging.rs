use crate::actions::{Action, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Rendered comparisons are large, log only their token
        match action {
            Action::Session(SessionAction::CompareLoaded { token, .. }) => {
                log::debug!("Action: Session(CompareLoaded {{ token: {} }})", token);
            }
            Action::Session(SessionAction::CompareRendered { token, .. }) => {
                log::debug!("Action: Session(CompareRendered {{ token: {} }})", token);
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
