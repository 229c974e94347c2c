//! Trait for pluggable markdown engines.

use thiserror::Error;

/// Errors that can occur while rendering markdown.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    /// The engine rejected the input.
    #[error("Markdown rendering failed: {0}")]
    Engine(String),
}

/// Turns markdown source into HTML.
///
/// Raw HTML embedded in the source must not be passed through unescaped.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, source: &str) -> Result<String, MarkdownError>;
}
