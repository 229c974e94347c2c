use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod confirmation_middleware;
pub mod logging;
pub mod session_middleware;

pub use confirmation_middleware::ConfirmationMiddleware;
pub use logging::LoggingMiddleware;
pub use session_middleware::SessionMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the store's thread. Anything slow (service calls) must
/// be spawned and report back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
