//! State module
//!
//! All state types for the detail page.

pub mod app;
pub mod confirmation;
pub mod edit_buffer;
pub mod mode;
pub mod notifications;
pub mod picker;
pub mod session;

pub use app::{AppState, Redirect};
pub use confirmation::{ConfirmationIntent, ConfirmationState};
pub use edit_buffer::{EditBuffer, EditField, ValidationError};
pub use mode::{DiffPanel, ModeController, ModeError, ModeState, PanelVisibility, ViewMode};
pub use notifications::{Notification, NotificationKind, NotificationLog};
pub use picker::PickerState;
pub use session::{PendingOps, SessionState};
