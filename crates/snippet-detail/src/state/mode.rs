//! Mode Controller State
//!
//! The detail page shows exactly one of three panels: the read-only view,
//! the edit form or the side-by-side diff. Before the snippet has loaded no
//! panel is shown and every transition is refused.
//!
//! ```text
//! Loading         ──on_loaded──────────────► ReadOnly
//! ReadOnly        ──enter_edit─────────────► Edit
//! Edit            ──cancel_edit/finish_edit─► ReadOnly
//! ReadOnly | Diff ──enter_diff─────────────► Diff
//! Diff            ──exit_diff──────────────► ReadOnly
//! ```

use super::edit_buffer::EditBuffer;
use snippet_client::Snippet;
use snippet_diff_viewer::{DiffResult, RenderedDiff, ScrollOutcome, ScrollSync};
use std::fmt;
use thiserror::Error;

/// Visible mode of the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    ReadOnly,
    Edit,
    Diff,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::ReadOnly => f.write_str("READ_ONLY"),
            ViewMode::Edit => f.write_str("EDIT"),
            ViewMode::Diff => f.write_str("DIFF"),
        }
    }
}

/// Refused mode transitions
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("Cannot switch from {from} to {to}")]
    IllegalTransition { from: ViewMode, to: ViewMode },

    #[error("Snippet is not loaded yet")]
    NotLoaded,
}

/// A received comparison together with its rendering and scroll state
#[derive(Debug, Clone)]
pub struct DiffPanel {
    pub diff: DiffResult,
    pub rendered: RenderedDiff,
    pub scroll: ScrollSync,
    /// Outcome of the most recent scroll event
    pub last_scroll: Option<ScrollOutcome>,
}

impl DiffPanel {
    pub fn new(diff: DiffResult, rendered: RenderedDiff) -> Self {
        Self {
            diff,
            rendered,
            scroll: ScrollSync::new(),
            last_scroll: None,
        }
    }
}

/// Internal state; data that only exists in one mode lives in its variant
#[derive(Debug, Clone, Default)]
pub enum ModeState {
    #[default]
    Loading,
    ReadOnly,
    Edit(EditBuffer),
    Diff(Box<DiffPanel>),
}

/// Which panels are visible; at most one flag is ever set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    pub read_only: bool,
    pub edit: bool,
    pub diff: bool,
}

impl PanelVisibility {
    pub fn visible_count(&self) -> usize {
        [self.read_only, self.edit, self.diff]
            .iter()
            .filter(|visible| **visible)
            .count()
    }
}

/// Mode state machine of the detail page
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    state: ModeState,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active mode, `None` while loading
    pub fn mode(&self) -> Option<ViewMode> {
        match self.state {
            ModeState::Loading => None,
            ModeState::ReadOnly => Some(ViewMode::ReadOnly),
            ModeState::Edit(_) => Some(ViewMode::Edit),
            ModeState::Diff(_) => Some(ViewMode::Diff),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ModeState::Loading)
    }

    /// Whether a comparison may be started (READ_ONLY or DIFF)
    pub fn can_compare(&self) -> bool {
        matches!(self.state, ModeState::ReadOnly | ModeState::Diff(_))
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            read_only: matches!(self.state, ModeState::ReadOnly),
            edit: matches!(self.state, ModeState::Edit(_)),
            diff: matches!(self.state, ModeState::Diff(_)),
        }
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        match &self.state {
            ModeState::Edit(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match &mut self.state {
            ModeState::Edit(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn diff(&self) -> Option<&DiffPanel> {
        match &self.state {
            ModeState::Diff(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn diff_mut(&mut self) -> Option<&mut DiffPanel> {
        match &mut self.state {
            ModeState::Diff(panel) => Some(panel),
            _ => None,
        }
    }

    /// The snippet has loaded: Loading → ReadOnly
    ///
    /// A reload while already showing the snippet keeps the current mode.
    pub fn on_loaded(&mut self) {
        if self.is_loading() {
            self.state = ModeState::ReadOnly;
        }
    }

    /// ReadOnly → Edit, seeding the buffer from `snippet`
    pub fn enter_edit(&mut self, snippet: &Snippet) -> Result<(), ModeError> {
        self.require(ViewMode::ReadOnly, ViewMode::Edit)?;
        self.state = ModeState::Edit(EditBuffer::from_snippet(snippet));
        Ok(())
    }

    /// Edit → ReadOnly, discarding the buffer
    pub fn cancel_edit(&mut self) -> Result<EditBuffer, ModeError> {
        self.take_edit_buffer()
    }

    /// Edit → ReadOnly after the server confirmed the save
    pub fn finish_edit(&mut self) -> Result<EditBuffer, ModeError> {
        self.take_edit_buffer()
    }

    /// ReadOnly → Diff, or Diff → Diff replacing the previous comparison
    pub fn enter_diff(&mut self, panel: DiffPanel) -> Result<(), ModeError> {
        match self.mode() {
            None => Err(ModeError::NotLoaded),
            Some(ViewMode::ReadOnly | ViewMode::Diff) => {
                self.state = ModeState::Diff(Box::new(panel));
                Ok(())
            }
            Some(from) => Err(ModeError::IllegalTransition {
                from,
                to: ViewMode::Diff,
            }),
        }
    }

    /// Diff → ReadOnly, dropping the comparison
    pub fn exit_diff(&mut self) -> Result<(), ModeError> {
        self.require(ViewMode::Diff, ViewMode::ReadOnly)?;
        self.state = ModeState::ReadOnly;
        Ok(())
    }

    fn take_edit_buffer(&mut self) -> Result<EditBuffer, ModeError> {
        self.require(ViewMode::Edit, ViewMode::ReadOnly)?;
        match std::mem::replace(&mut self.state, ModeState::ReadOnly) {
            ModeState::Edit(buffer) => Ok(buffer),
            // `require` guarantees Edit
            other => {
                self.state = other;
                Err(ModeError::IllegalTransition {
                    from: ViewMode::Edit,
                    to: ViewMode::ReadOnly,
                })
            }
        }
    }

    fn require(&self, expected: ViewMode, to: ViewMode) -> Result<(), ModeError> {
        match self.mode() {
            None => Err(ModeError::NotLoaded),
            Some(from) if from == expected => Ok(()),
            Some(from) => Err(ModeError::IllegalTransition { from, to }),
        }
    }
}
