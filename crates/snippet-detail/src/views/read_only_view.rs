use super::{attr, disabled, text, PageView};
use crate::state::AppState;
use crate::view_models::snippet_view_model::NO_TAGS;
use crate::view_models::{ControlsViewModel, SnippetViewModel};
use snippet_diff_viewer::render_markdown_or_escaped;

/// Read-only panel: header, metadata, code block and notes
pub fn render_read_only(state: &AppState, view: &PageView) -> String {
    let Some(vm) = SnippetViewModel::from_state(state) else {
        return String::new();
    };
    let controls = ControlsViewModel::from_state(state);

    let badge = match vm.language {
        Some(language) => format!("<span class=\"language-badge\">{}</span>", text(language)),
        None => String::new(),
    };

    let tags = if vm.has_tags() {
        vm.tags
            .iter()
            .map(|tag| format!("<span class=\"tag\">{}</span>", text(tag)))
            .collect::<String>()
    } else {
        format!("<span class=\"tag tag-empty\">{}</span>", NO_TAGS)
    };

    let code = view.code.render(&vm.code, vm.language);
    let code_class = if code.highlighted { " hljs" } else { "" };
    let notes = render_markdown_or_escaped(view.markdown.as_deref(), &vm.notes);

    format!(
        concat!(
            "<section id=\"readOnlyMode\">",
            "<header><h1 class=\"snippet-title\" title=\"{title_attr}\">{title}</h1>{badge}",
            "<div class=\"actions\">",
            "<button class=\"btn btn-primary\" data-action=\"edit\"{edit}>Edit</button>",
            "<button class=\"btn btn-secondary\" data-action=\"compare\"{compare}>Compare</button>",
            "<button class=\"btn btn-danger\" data-action=\"delete\"{delete}>Delete</button>",
            "</div></header>",
            "<div class=\"tags-container\">{tags}</div>",
            "<div class=\"dates\">",
            "<div class=\"date-item\"><span class=\"date-label\">Created</span><span>{created}</span></div>",
            "<div class=\"date-item\"><span class=\"date-label\">Updated</span><span>{updated}</span></div>",
            "</div>",
            "<div class=\"code-container\">",
            "<button class=\"btn btn-copy\" data-action=\"copy\" data-copy=\"{raw}\" ",
            "data-copied-label=\"Copied!\">Copy</button>",
            "<div id=\"lineNumbers\">{line_numbers}</div>",
            "<pre><code id=\"codeBlock\" class=\"code-block{code_class}\">{code}</code></pre></div>",
            "<div class=\"notes-content\">{notes}</div>",
            "</section>"
        ),
        title_attr = attr(&vm.name),
        title = text(&vm.name),
        badge = badge,
        edit = disabled(controls.edit),
        compare = disabled(controls.compare),
        delete = disabled(controls.delete),
        tags = tags,
        created = text(&vm.created),
        updated = text(&vm.updated),
        raw = attr(&vm.code),
        line_numbers = code.line_numbers_html(),
        code_class = code_class,
        code = code.html,
        notes = notes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::snippet;

    fn state_with(content: &str, notes: &str) -> AppState {
        let mut snippet = snippet(1, "<b>Greeter</b>");
        snippet.content = content.to_string();
        snippet.extra_notes = notes.to_string();
        snippet.tags.clear();
        let mut state = AppState::default();
        state.session.snippet = Some(snippet);
        state.mode.on_loaded();
        state
    }

    #[test]
    fn test_escapes_name_and_shows_placeholders() {
        let html = render_read_only(&state_with("", ""), &PageView::default());
        assert!(html.contains("&lt;b&gt;Greeter&lt;/b&gt;"));
        assert!(!html.contains("<b>Greeter"));
        assert!(html.contains("No code content available"));
        assert!(html.contains("No notes available"));
        assert!(html.contains("No tags"));
        // The placeholder is a single line
        assert!(html.contains("<div id=\"lineNumbers\"><div>1</div></div>"));
    }

    #[test]
    fn test_copy_button_carries_raw_code() {
        let html = render_read_only(&state_with("say(\"a & b\")\nend", ""), &PageView::default());
        assert!(html.contains("data-action=\"copy\""));
        assert!(html.contains("data-copy=\"say(&quot;a &amp; b&quot;)\nend\""));
        assert!(html.contains("data-copied-label=\"Copied!\""));
    }

    #[test]
    fn test_line_numbers_follow_content() {
        let html = render_read_only(&state_with("a\nb\nc", "note"), &PageView::default());
        assert!(html.contains("<div>1</div><div>2</div><div>3</div>"));
    }
}
