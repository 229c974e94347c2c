//! Mode actions

use crate::state::EditField;

/// Actions switching panels or editing the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeAction {
    /// READ_ONLY → EDIT
    EnterEdit,
    /// EDIT → READ_ONLY, discarding changes
    CancelEdit,
    /// Replace the value of one form field
    EditField { field: EditField, value: String },
    /// DIFF → READ_ONLY
    ExitDiff,
}
