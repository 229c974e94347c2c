//! Comparison Picker State

use snippet_client::{SnippetId, SnippetPreview};

/// Candidates offered for comparison; empty while closed
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub open: bool,
    pub candidates: Vec<SnippetPreview>,
}

impl PickerState {
    /// Open with the candidates, leaving out the snippet being viewed
    pub fn show(&mut self, candidates: Vec<SnippetPreview>, current: Option<SnippetId>) {
        self.candidates = candidates
            .into_iter()
            .filter(|candidate| Some(candidate.id) != current)
            .collect();
        self.open = !self.candidates.is_empty();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.candidates.clear();
    }

    pub fn contains(&self, id: SnippetId) -> bool {
        self.candidates.iter().any(|candidate| candidate.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(id: i64) -> SnippetPreview {
        SnippetPreview {
            id: SnippetId(id),
            name: format!("Snippet {}", id),
            language: None,
            tags: Default::default(),
            created_at: None,
        }
    }

    #[test]
    fn test_show_excludes_current() {
        let mut picker = PickerState::default();
        picker.show(vec![preview(1), preview(2), preview(3)], Some(SnippetId(2)));

        assert!(picker.open);
        assert!(picker.contains(SnippetId(1)));
        assert!(!picker.contains(SnippetId(2)));
        assert_eq!(picker.candidates.len(), 2);

        picker.close();
        assert!(!picker.open);
        assert!(picker.candidates.is_empty());
    }

    #[test]
    fn test_show_with_only_current_stays_closed() {
        let mut picker = PickerState::default();
        picker.show(vec![preview(7)], Some(SnippetId(7)));
        assert!(!picker.open);
    }
}
