//! Scroll Reducer
//!
//! Feeds pane scroll events into the diff panel's scroll sync.

use crate::actions::ScrollAction;
use crate::state::ModeController;

pub fn reduce_scroll(mut state: ModeController, action: &ScrollAction) -> ModeController {
    match action {
        ScrollAction::Scrolled { pane, offset } => match state.diff_mut() {
            Some(panel) => {
                let outcome = panel.scroll.on_scroll(*pane, *offset);
                log::trace!("Scroll {:?} {:?} -> {:?}", pane, offset, outcome);
                panel.last_scroll = Some(outcome);
            }
            None => log::debug!("Ignoring scroll event outside of diff mode"),
        },
    }
    state
}
