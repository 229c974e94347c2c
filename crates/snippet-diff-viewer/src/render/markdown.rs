//! Markdown rendering for snippet notes.

use crate::traits::{MarkdownError, MarkdownRenderer};
use pulldown_cmark::{html, Event, Options, Parser};

/// CommonMark renderer backed by pulldown-cmark.
///
/// Raw HTML in the source is emitted as escaped text.
#[derive(Debug, Clone, Copy)]
pub struct CmarkRenderer {
    options: Options,
}

impl CmarkRenderer {
    /// Renderer with tables, strikethrough and task lists enabled.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, source: &str) -> Result<String, MarkdownError> {
        let parser = Parser::new_ext(source, self.options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// Render markdown, falling back to escaped plain text when no renderer is
/// installed or rendering fails.
pub fn render_markdown_or_escaped(
    renderer: Option<&dyn MarkdownRenderer>,
    source: &str,
) -> String {
    let Some(renderer) = renderer else {
        return html_escape::encode_text(source).into_owned();
    };

    match renderer.render(source) {
        Ok(html) => html,
        Err(e) => {
            log::debug!("Markdown fallback to plain text: {}", e);
            html_escape::encode_text(source).into_owned()
        }
    }
}
