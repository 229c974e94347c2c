//! Synchronized scrolling of the diff columns.

mod sync;

pub use sync::{Pane, ScrollOffset, ScrollOutcome, ScrollSync};
