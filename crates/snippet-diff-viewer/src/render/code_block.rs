//! Single-column code rendering for the read-only snippet view.

use crate::traits::SyntaxHighlighter;
use std::sync::Arc;

/// Renders a whole snippet body with line numbers.
#[derive(Clone, Default)]
pub struct CodeBlockRenderer {
    highlighter: Option<Arc<dyn SyntaxHighlighter>>,
}

impl std::fmt::Debug for CodeBlockRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeBlockRenderer")
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

/// Output of [`CodeBlockRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCode {
    /// `1..=n` where `n` is the number of `\n`-separated lines.
    pub line_numbers: Vec<String>,
    /// Safe markup of the whole block.
    pub html: String,
    pub highlighted: bool,
}

impl RenderedCode {
    /// Markup of the line-number gutter.
    pub fn line_numbers_html(&self) -> String {
        self.line_numbers
            .iter()
            .map(|n| format!("<div>{}</div>", n))
            .collect()
    }
}

impl CodeBlockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlighter(highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self {
            highlighter: Some(highlighter),
        }
    }

    pub fn render(&self, code: &str, language: Option<&str>) -> RenderedCode {
        let line_numbers = (1..=code.split('\n').count())
            .map(|n| n.to_string())
            .collect();

        let highlighted = match (self.highlighter.as_deref(), language) {
            (Some(engine), Some(language)) if engine.supports(language) => {
                match engine.highlight_block(language, code) {
                    Ok(html) => Some(html),
                    Err(e) => {
                        log::debug!("CodeBlockRenderer: plain text fallback: {}", e);
                        None
                    }
                }
            }
            _ => None,
        };

        RenderedCode {
            line_numbers,
            highlighted: highlighted.is_some(),
            html: highlighted.unwrap_or_else(|| html_escape::encode_text(code).into_owned()),
        }
    }
}
