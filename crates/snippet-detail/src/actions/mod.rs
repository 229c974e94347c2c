//! Actions module
//!
//! Every change to the detail page is described by an [`Action`]. User
//! requests and service responses travel the same path: middleware chain,
//! then reducer.

pub mod confirmation;
pub mod mode;
pub mod notification;
pub mod picker;
pub mod scroll;
pub mod session;

pub use confirmation::ConfirmationAction;
pub use mode::ModeAction;
pub use notification::NotificationAction;
pub use picker::PickerAction;
pub use scroll::ScrollAction;
pub use session::SessionAction;

use crate::state::Redirect;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Snippet lifecycle: load, save, delete, compare and their results
    Session(SessionAction),
    /// Panel switches and edit form input
    Mode(ModeAction),
    /// Comparison picker
    Picker(PickerAction),
    /// Out-of-band confirmation prompt
    Confirmation(ConfirmationAction),
    /// User-visible outcomes
    Notification(NotificationAction),
    /// Scroll events of the diff panes
    Scroll(ScrollAction),
    /// Leave the detail page
    Redirect(Redirect),
    /// No-op
    None,
}

impl Action {
    /// Whether this action starts or completes snippet work
    ///
    /// Such actions are dropped once the snippet has been deleted.
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            Action::Session(_)
                | Action::Mode(_)
                | Action::Picker(_)
                | Action::Confirmation(_)
                | Action::Scroll(_)
        )
    }
}
