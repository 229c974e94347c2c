use super::{attr, text};
use crate::state::PickerState;

/// Modal listing the comparison candidates
pub fn render_picker(picker: &PickerState) -> String {
    let items: String = picker
        .candidates
        .iter()
        .map(|candidate| {
            format!(
                concat!(
                    "<div class=\"snippet-item\" data-snippet-id=\"{id}\">",
                    "<div class=\"snippet-item-name\">{name}</div>",
                    "<div class=\"snippet-item-language\">{language}</div>",
                    "</div>"
                ),
                id = attr(&candidate.id.to_string()),
                name = text(&candidate.name),
                language = candidate
                    .language
                    .map(|lang| lang.as_str())
                    .unwrap_or("No language"),
            )
        })
        .collect();

    format!(
        concat!(
            "<div class=\"compare-modal-overlay show\"><div class=\"compare-modal\">",
            "<h3 class=\"compare-modal-title\">Select Snippet to Compare</h3>",
            "<div class=\"snippet-list\">{items}</div>",
            "<div class=\"modal-buttons\">",
            "<button class=\"btn btn-secondary\" data-action=\"close-picker\">Cancel</button>",
            "</div></div></div>"
        ),
        items = items
    )
}
