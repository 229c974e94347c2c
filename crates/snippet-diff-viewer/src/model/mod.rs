//! Data models for snippet comparisons.

#[cfg(feature = "client")]
mod convert;
mod diff;

pub use diff::{DiffLine, DiffResult, DiffSide, LineType};
