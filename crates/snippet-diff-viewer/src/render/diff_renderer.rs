//! Two-column diff rendering.

use crate::model::{DiffLine, DiffResult, DiffSide, LineType};
use crate::traits::SyntaxHighlighter;
use std::sync::Arc;

/// Renders a [`DiffResult`] into two aligned columns.
///
/// Rendering is a pure function of the diff and the declared language. A
/// missing highlighter, an unsupported language or a highlighting failure
/// all yield the escaped plain text for the affected lines.
#[derive(Clone, Default)]
pub struct DiffRenderer {
    highlighter: Option<Arc<dyn SyntaxHighlighter>>,
}

impl std::fmt::Debug for DiffRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffRenderer")
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}

impl DiffRenderer {
    /// Renderer without highlighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that highlights supported languages.
    pub fn with_highlighter(highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self {
            highlighter: Some(highlighter),
        }
    }

    /// Render both sides from scratch.
    pub fn render(&self, diff: &DiffResult, language: Option<&str>) -> RenderedDiff {
        let highlighter = self.active_highlighter(language);
        RenderedDiff {
            title: diff.title(),
            left: self.render_side(&diff.comparing, highlighter),
            right: self.render_side(&diff.comparing_to, highlighter),
        }
    }

    /// The highlighter together with the language, when it applies.
    fn active_highlighter<'a>(
        &'a self,
        language: Option<&'a str>,
    ) -> Option<(&'a dyn SyntaxHighlighter, &'a str)> {
        let highlighter = self.highlighter.as_deref()?;
        let language = language?;
        highlighter
            .supports(language)
            .then_some((highlighter, language))
    }

    fn render_side(
        &self,
        side: &DiffSide,
        highlighter: Option<(&dyn SyntaxHighlighter, &str)>,
    ) -> RenderedColumn {
        let (line_numbers, lines): (Vec<String>, Vec<RenderedLine>) = side
            .lines
            .iter()
            .map(|line| (line.line_num.to_string(), render_line(line, highlighter)))
            .unzip();

        RenderedColumn {
            header: side.name.clone(),
            line_numbers,
            lines,
        }
    }
}

fn render_line(
    line: &DiffLine,
    highlighter: Option<(&dyn SyntaxHighlighter, &str)>,
) -> RenderedLine {
    let highlighted = highlighter.and_then(|(engine, language)| {
        match engine.highlight_line(language, &line.content) {
            Ok(html) => Some(html),
            Err(e) => {
                log::debug!(
                    "DiffRenderer: plain text fallback for line {}: {}",
                    line.line_num,
                    e
                );
                None
            }
        }
    });

    RenderedLine {
        line_type: line.line_type,
        highlighted: highlighted.is_some(),
        html: highlighted
            .unwrap_or_else(|| html_escape::encode_text(&line.content).into_owned()),
    }
}

/// Output of [`DiffRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiff {
    /// `"<comparing> vs <comparing_to>"`.
    pub title: String,
    /// The `comparing` side.
    pub left: RenderedColumn,
    /// The `comparing_to` side.
    pub right: RenderedColumn,
}

impl RenderedDiff {
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// One rendered side: header, line-number column and code column.
///
/// `line_numbers` and `lines` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedColumn {
    /// Snippet name shown above the column (plain text, unescaped).
    pub header: String,
    /// Line labels in display order.
    pub line_numbers: Vec<String>,
    /// Rendered lines in display order.
    pub lines: Vec<RenderedLine>,
}

impl RenderedColumn {
    /// Number of rendered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Markup of the line-number column.
    pub fn line_numbers_html(&self) -> String {
        self.line_numbers
            .iter()
            .map(|n| format!("<div>{}</div>", n))
            .collect()
    }

    /// Markup of the code column.
    pub fn code_html(&self) -> String {
        self.lines.iter().map(RenderedLine::to_html).collect()
    }
}

/// A single rendered code line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub line_type: LineType,
    /// Safe markup: escaped text or highlighter output.
    pub html: String,
    /// Whether `html` came from the highlighter.
    pub highlighted: bool,
}

impl RenderedLine {
    /// CSS class of the line, if any.
    pub fn class(&self) -> Option<&'static str> {
        self.line_type.css_class()
    }

    pub fn to_html(&self) -> String {
        match self.class() {
            Some(class) => format!("<div class=\"{}\">{}</div>", class, self.html),
            None => format!("<div>{}</div>", self.html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HighlightError;
    use pretty_assertions::assert_eq;

    /// Highlighter stub that wraps lines in a marker and fails on demand.
    struct Marker;

    impl SyntaxHighlighter for Marker {
        fn supports(&self, language: &str) -> bool {
            language == "JAVA"
        }

        fn highlight_line(&self, _language: &str, line: &str) -> Result<String, HighlightError> {
            if line.contains("boom") {
                return Err(HighlightError::Engine("boom".to_string()));
            }
            Ok(format!("<b>{}</b>", html_escape::encode_text(line)))
        }
    }

    fn side(name: &str, types: &[LineType]) -> DiffSide {
        DiffSide::new(
            name,
            types
                .iter()
                .enumerate()
                .map(|(i, t)| DiffLine::new(i as u32 + 1, *t, format!("line {}", i + 1)))
                .collect(),
        )
    }

    #[test]
    fn test_columns_match_side_lengths_and_classes() {
        use LineType::*;
        let left_types = [Unchanged, Removed, Unchanged, Removed, Unchanged];
        let right_types = [Unchanged, Added, Added, Unchanged, Added, Unchanged, Added];
        let diff = DiffResult::new(side("A", &left_types), side("B", &right_types));

        let rendered = DiffRenderer::new().render(&diff, None);

        assert_eq!(rendered.left.len(), 5);
        assert_eq!(rendered.right.len(), 7);
        assert_eq!(rendered.left.line_numbers.len(), 5);
        assert_eq!(rendered.right.line_numbers.len(), 7);
        for (line, expected) in rendered.left.lines.iter().zip(left_types) {
            assert_eq!(line.class(), expected.css_class());
        }
        for (line, expected) in rendered.right.lines.iter().zip(right_types) {
            assert_eq!(line.class(), expected.css_class());
        }
        assert_eq!(rendered.title(), "A vs B");
        assert_eq!(rendered.left.header, "A");
        assert_eq!(rendered.right.header, "B");
    }

    #[test]
    fn test_content_is_escaped() {
        let diff = DiffResult::new(
            DiffSide::new("A", vec![DiffLine::added(1, "<img src=x onerror=alert(1)>")]),
            DiffSide::new("B", vec![]),
        );

        let rendered = DiffRenderer::new().render(&diff, Some("JAVA"));
        assert_eq!(
            rendered.left.lines[0].html,
            "&lt;img src=x onerror=alert(1)&gt;"
        );
        assert!(!rendered.left.code_html().contains("<img"));
    }

    #[test]
    fn test_line_numbers_are_labels() {
        let diff = DiffResult::new(
            DiffSide::new(
                "A",
                vec![DiffLine::unchanged(0, "zero"), DiffLine::unchanged(7, "seven")],
            ),
            DiffSide::new("B", vec![]),
        );

        let rendered = DiffRenderer::new().render(&diff, None);
        assert_eq!(rendered.left.line_numbers, vec!["0", "7"]);
        assert_eq!(rendered.left.line_numbers_html(), "<div>0</div><div>7</div>");
        assert_eq!(rendered.left.lines[1].html, "seven");
    }

    #[test]
    fn test_highlighting_only_for_supported_language() {
        let renderer = DiffRenderer::with_highlighter(Arc::new(Marker));
        let diff = DiffResult::new(
            DiffSide::new("A", vec![DiffLine::unchanged(1, "a<b")]),
            DiffSide::new("B", vec![DiffLine::unchanged(1, "a<b")]),
        );

        let java = renderer.render(&diff, Some("JAVA"));
        assert_eq!(java.left.lines[0].html, "<b>a&lt;b</b>");
        assert!(java.left.lines[0].highlighted);

        let other = renderer.render(&diff, Some("OTHER"));
        assert_eq!(other.left.lines[0].html, "a&lt;b");
        assert!(!other.left.lines[0].highlighted);

        let unset = renderer.render(&diff, None);
        assert!(!unset.right.lines[0].highlighted);
    }

    #[test]
    fn test_highlight_failure_falls_back_per_line() {
        let renderer = DiffRenderer::with_highlighter(Arc::new(Marker));
        let diff = DiffResult::new(
            DiffSide::new(
                "A",
                vec![
                    DiffLine::removed(1, "boom <x>"),
                    DiffLine::unchanged(2, "fine"),
                ],
            ),
            DiffSide::new("B", vec![]),
        );

        let rendered = renderer.render(&diff, Some("JAVA"));
        assert_eq!(rendered.left.lines[0].html, "boom &lt;x&gt;");
        assert!(!rendered.left.lines[0].highlighted);
        assert_eq!(rendered.left.lines[1].html, "<b>fine</b>");
    }

    #[test]
    fn test_code_html() {
        let diff = DiffResult::new(
            DiffSide::new(
                "A",
                vec![
                    DiffLine::unchanged(1, "same"),
                    DiffLine::removed(2, "gone"),
                ],
            ),
            DiffSide::new("B", vec![DiffLine::added(1, "new")]),
        );

        let rendered = DiffRenderer::new().render(&diff, None);
        assert_eq!(
            rendered.left.code_html(),
            "<div>same</div><div class=\"diff-line-removed\">gone</div>"
        );
        assert_eq!(
            rendered.right.code_html(),
            "<div class=\"diff-line-added\">new</div>"
        );
    }
}
