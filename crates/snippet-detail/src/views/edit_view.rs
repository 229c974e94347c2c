use super::{attr, disabled, text};
use crate::state::{AppState, EditBuffer};
use crate::view_models::ControlsViewModel;
use snippet_client::SnippetLanguage;

fn language_label(language: SnippetLanguage) -> &'static str {
    match language {
        SnippetLanguage::Java => "Java",
        SnippetLanguage::Other => "Other",
    }
}

/// Edit form pre-filled from the buffer
pub fn render_edit_form(state: &AppState, buffer: &EditBuffer) -> String {
    let controls = ControlsViewModel::from_state(state);
    let selected = SnippetLanguage::parse(&buffer.language);

    let mut options = format!(
        "<option value=\"\"{}>Select a language (optional)</option>",
        if selected.is_none() { " selected" } else { "" }
    );
    for language in SnippetLanguage::ALL {
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            language.as_str(),
            if selected == Some(language) { " selected" } else { "" },
            language_label(language)
        ));
    }

    format!(
        concat!(
            "<section id=\"editMode\">",
            "<input id=\"editTitle\" type=\"text\" value=\"{name}\">",
            "<select id=\"editLanguage\">{options}</select>",
            "<input id=\"editTags\" type=\"text\" value=\"{tags}\" placeholder=\"tag1, tag2\">",
            "<textarea id=\"editCode\">{content}</textarea>",
            "<textarea id=\"editNotes\">{notes}</textarea>",
            "<div class=\"actions\">",
            "<button class=\"btn btn-secondary\" data-action=\"cancel\"{cancel}>Cancel</button>",
            "<button class=\"btn btn-primary\" data-action=\"save\"{save}>{save_label}</button>",
            "</div></section>"
        ),
        name = attr(&buffer.name),
        options = options,
        tags = attr(&buffer.tags_text),
        content = text(&buffer.content),
        notes = text(&buffer.extra_notes),
        cancel = disabled(controls.cancel_edit),
        save = disabled(controls.save),
        save_label = controls.save_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_are_escaped() {
        let buffer = EditBuffer {
            name: "say \"hi\"".to_string(),
            language: "JAVA".to_string(),
            tags_text: "a, b".to_string(),
            content: "</textarea><script>".to_string(),
            extra_notes: String::new(),
        };
        let html = render_edit_form(&AppState::default(), &buffer);

        assert!(html.contains("value=\"say &quot;hi&quot;\""));
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
        assert!(html.contains("<option value=\"JAVA\" selected>Java</option>"));
        assert!(html.contains("<option value=\"\">Select a language (optional)</option>"));
    }
}
