//! Extension traits for plugging rendering engines into the viewer.

mod markdown_renderer;
mod syntax_highlighter;

pub use markdown_renderer::{MarkdownError, MarkdownRenderer};
pub use syntax_highlighter::{HighlightError, SyntaxHighlighter};
