use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

/// Store - holds application state and manages the Redux loop
///
/// Actions are applied strictly one at a time: middleware chain first, then
/// the reducer. Actions emitted by middleware or background tasks are queued
/// and applied in arrival order by [`Store::pump`] and [`Store::settle`].
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action and everything it queued synchronously
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.pump();
    }

    /// Apply all queued actions without waiting; returns how many were applied
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
            applied += 1;
        }
        applied
    }

    /// Apply queued actions until no request is in flight or `timeout` passes
    ///
    /// Returns `true` when the session went idle.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if self.state.session.is_idle() {
                return true;
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.action_rx.recv_timeout(remaining) {
                Ok(action) => self.process(action),
                Err(RecvTimeoutError::Timeout) => {
                    log::warn!(
                        "Store: still waiting for {} after {:?}",
                        self.state.session.pending.label(),
                        timeout
                    );
                    return false;
                }
                Err(RecvTimeoutError::Disconnected) => return self.state.session.is_idle(),
            }
        }
    }

    /// Process an action through middleware chain and reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }
    }
}
