//! Scroll actions

use snippet_diff_viewer::{Pane, ScrollOffset};

/// Scroll events reported by the diff panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// A pane reported a new scroll position
    Scrolled { pane: Pane, offset: ScrollOffset },
}
