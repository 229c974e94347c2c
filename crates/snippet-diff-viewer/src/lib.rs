//! # snippet-diff-viewer
//!
//! Rendering pipeline for snippet comparisons: a line-tagged [`DiffResult`]
//! becomes two aligned, optionally syntax-highlighted HTML columns whose
//! scroll positions are kept in lockstep by [`ScrollSync`].
//!
//! ## Design Principles
//!
//! This crate is **instrumented**: it receives data and returns rendered
//! output or outcomes without calling external services. Highlighting and
//! markdown engines are plugged in through [`SyntaxHighlighter`] and
//! [`MarkdownRenderer`]; syntect and pulldown-cmark adapters ship with it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use snippet_diff_viewer::{DiffHighlighter, DiffRenderer, Pane, ScrollOffset, ScrollSync};
//!
//! let renderer = DiffRenderer::with_highlighter(Arc::new(DiffHighlighter::new()));
//! let rendered = renderer.render(&diff, Some("JAVA"));
//! println!("{}", rendered.title());
//!
//! let mut sync = ScrollSync::new();
//! let outcome = sync.on_scroll(Pane::Left, ScrollOffset::new(100, 0));
//! // Apply ScrollOutcome::Mirror to the target pane
//! ```
//!
//! With the `client` feature, [`DiffResult`] converts from
//! `snippet_client::CompareResponse`.

pub mod highlight;
pub mod model;
pub mod render;
pub mod scroll;
pub mod traits;

// Re-export commonly used types
pub use highlight::{DiffHighlighter, DEFAULT_THEME};
pub use model::{DiffLine, DiffResult, DiffSide, LineType};
pub use render::{
    render_markdown_or_escaped, CmarkRenderer, CodeBlockRenderer, DiffRenderer, RenderedCode,
    RenderedColumn, RenderedDiff, RenderedLine,
};
pub use scroll::{Pane, ScrollOffset, ScrollOutcome, ScrollSync};
pub use traits::{HighlightError, MarkdownError, MarkdownRenderer, SyntaxHighlighter};
