//! Syntax highlighting using syntect.

mod highlighter;

pub use highlighter::{DiffHighlighter, DEFAULT_THEME};
