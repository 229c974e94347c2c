//! Trait for pluggable syntax highlighting engines.

use thiserror::Error;

/// Errors that can occur while highlighting.
///
/// Renderers never surface these to users; they fall back to escaped text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// The engine has no grammar for the language.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The engine failed while processing the input.
    #[error("Highlighting failed: {0}")]
    Engine(String),
}

/// Produces highlighted markup for code.
///
/// Implementations must return markup in which every piece of source text is
/// HTML-escaped; the renderers insert the result verbatim.
///
/// # Example
///
/// ```ignore
/// use snippet_diff_viewer::{HighlightError, SyntaxHighlighter};
///
/// struct Upper;
///
/// impl SyntaxHighlighter for Upper {
///     fn supports(&self, language: &str) -> bool {
///         language == "JAVA"
///     }
///
///     fn highlight_line(&self, _language: &str, line: &str) -> Result<String, HighlightError> {
///         Ok(html_escape::encode_text(&line.to_uppercase()).into_owned())
///     }
/// }
/// ```
pub trait SyntaxHighlighter: Send + Sync {
    /// Whether the engine can highlight the given declared language (e.g. `"JAVA"`).
    fn supports(&self, language: &str) -> bool;

    /// Highlight a single line without its trailing newline.
    fn highlight_line(&self, language: &str, line: &str) -> Result<String, HighlightError>;

    /// Highlight a multi-line block, joining lines with `\n`.
    ///
    /// Engines that track state across lines should override this.
    fn highlight_block(&self, language: &str, code: &str) -> Result<String, HighlightError> {
        code.split('\n')
            .map(|line| self.highlight_line(language, line))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n"))
    }
}
