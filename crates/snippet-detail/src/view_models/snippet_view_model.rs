//! Snippet View Model
//!
//! Pre-computes the read-only presentation of the loaded snippet.

use crate::state::AppState;
use chrono::NaiveDateTime;

/// Shown instead of an empty code block
pub const NO_CODE: &str = "No code content available";
/// Shown instead of empty notes
pub const NO_NOTES: &str = "No notes available";
/// Shown instead of an empty tag list
pub const NO_TAGS: &str = "No tags";

const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// View model for the read-only panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetViewModel {
    /// Plain text, escaped by the view
    pub name: String,
    /// Wire name of the language, `None` hides the badge
    pub language: Option<&'static str>,
    pub tags: Vec<String>,
    /// e.g. "Jan 5, 2025, 03:04 PM"
    pub created: String,
    pub updated: String,
    /// Code body, or the placeholder when empty
    pub code: String,
    /// Markdown source of the notes, or the placeholder when empty
    pub notes: String,
}

impl SnippetViewModel {
    /// `None` until the snippet has loaded
    pub fn from_state(state: &AppState) -> Option<Self> {
        let snippet = state.session.snippet.as_ref()?;

        Some(Self {
            name: snippet.name.clone(),
            language: snippet.language.map(|lang| lang.as_str()),
            tags: snippet.tags.iter().cloned().collect(),
            created: format_date(snippet.created_at),
            updated: format_date(snippet.last_updated),
            code: or_placeholder(&snippet.content, NO_CODE),
            notes: or_placeholder(&snippet.extra_notes, NO_NOTES),
        })
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

fn format_date(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_placeholder(text: &str, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::snippet;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholders_and_dates() {
        let mut snippet = snippet(1, "Greeter");
        snippet.content = String::new();
        snippet.extra_notes = String::new();
        snippet.tags.clear();
        snippet.language = None;
        snippet.created_at = NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(15, 4, 0));
        snippet.last_updated = None;

        let mut state = AppState::default();
        state.session.snippet = Some(snippet);

        let vm = SnippetViewModel::from_state(&state).unwrap();
        assert_eq!(vm.code, NO_CODE);
        assert_eq!(vm.notes, NO_NOTES);
        assert!(!vm.has_tags());
        assert_eq!(vm.language, None);
        assert_eq!(vm.created, "Jan 5, 2025, 03:04 PM");
        assert_eq!(vm.updated, "-");
    }

    #[test]
    fn test_not_loaded() {
        assert_eq!(SnippetViewModel::from_state(&AppState::default()), None);
    }
}
