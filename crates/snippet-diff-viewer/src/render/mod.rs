//! HTML rendering of snippets and comparisons.

mod code_block;
mod diff_renderer;
mod markdown;

pub use code_block::{CodeBlockRenderer, RenderedCode};
pub use diff_renderer::{DiffRenderer, RenderedColumn, RenderedDiff, RenderedLine};
pub use markdown::{render_markdown_or_escaped, CmarkRenderer};
