use super::text;
use crate::state::DiffPanel;
use snippet_diff_viewer::RenderedColumn;

fn render_column(column: &RenderedColumn, side: &str) -> String {
    format!(
        concat!(
            "<div class=\"diff-column\">",
            "<div class=\"diff-column-header\">{header}</div>",
            "<div class=\"diff-content\">",
            "<div class=\"diff-line-numbers\" id=\"diffLineNumbers{side}\">{numbers}</div>",
            "<div class=\"diff-code\" id=\"diffCode{side}\">{code}</div>",
            "</div></div>"
        ),
        header = text(&column.header),
        side = side,
        numbers = column.line_numbers_html(),
        code = column.code_html(),
    )
}

/// Side-by-side comparison panel
pub fn render_diff(panel: &DiffPanel) -> String {
    let rendered = &panel.rendered;
    format!(
        concat!(
            "<section id=\"diffView\">",
            "<header><h2 class=\"diff-title\">{title}</h2>",
            "<button class=\"btn btn-secondary\" data-action=\"exit-diff\">Back to Snippet</button>",
            "</header>",
            "<div class=\"diff-columns\">{left}{right}</div>",
            "</section>"
        ),
        title = text(rendered.title()),
        left = render_column(&rendered.left, "Left"),
        right = render_column(&rendered.right, "Right"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use snippet_diff_viewer::{DiffLine, DiffRenderer, DiffResult, DiffSide};

    #[test]
    fn test_columns_and_title() {
        let diff = DiffResult::new(
            DiffSide::new("A<1>", vec![DiffLine::removed(1, "x < y")]),
            DiffSide::new("B", vec![DiffLine::added(1, "x > y")]),
        );
        let rendered = DiffRenderer::new().render(&diff, None);
        let html = render_diff(&DiffPanel::new(diff, rendered));

        assert!(html.contains("<h2 class=\"diff-title\">A&lt;1&gt; vs B</h2>"));
        assert!(html.contains("id=\"diffCodeLeft\"><div class=\"diff-line-removed\">x &lt; y</div>"));
        assert!(html.contains("id=\"diffCodeRight\"><div class=\"diff-line-added\">x &gt; y</div>"));
        assert!(html.contains("id=\"diffLineNumbersRight\"><div>1</div>"));
    }
}
