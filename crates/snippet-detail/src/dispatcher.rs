//! Dispatcher for middleware action dispatch
//!
//! When middleware or a background task needs to emit an action, it uses the
//! Dispatcher. Dispatched actions are queued on a channel and re-enter the
//! full middleware chain when the store pumps its queue.
//!
//! This enables patterns like:
//! - `SessionAction::Load` spawns a fetch whose result arrives as `SessionAction::Loaded`
//! - `PickerAction::Select` is translated into `PickerAction::Close` + `SessionAction::Compare`

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone; clones are moved into spawned tasks.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
