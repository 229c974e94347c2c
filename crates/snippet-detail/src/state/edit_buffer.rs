//! Edit Buffer State
//!
//! Working copy of the mutable snippet fields while the edit form is open.

use snippet_client::{Snippet, SnippetLanguage, SnippetUpdate};
use thiserror::Error;

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Language,
    Tags,
    Content,
    ExtraNotes,
}

/// Local validation failures, reported before any request is made
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Snippet name is required")]
    EmptyName,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl ValidationError {
    /// Short notification title
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyName => "Missing Name",
            Self::UnknownLanguage(_) => "Invalid Language",
        }
    }
}

/// Form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub name: String,
    /// Language as text, empty when unset
    pub language: String,
    /// Comma separated tags
    pub tags_text: String,
    pub content: String,
    pub extra_notes: String,
}

impl EditBuffer {
    /// Seed the form from the snippet of record
    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            name: snippet.name.clone(),
            language: snippet
                .language
                .map(|lang| lang.as_str().to_string())
                .unwrap_or_default(),
            tags_text: snippet
                .tags
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            content: snippet.content.clone(),
            extra_notes: snippet.extra_notes.clone(),
        }
    }

    /// Mutable access to a single field
    pub fn field_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Name => &mut self.name,
            EditField::Language => &mut self.language,
            EditField::Tags => &mut self.tags_text,
            EditField::Content => &mut self.content,
            EditField::ExtraNotes => &mut self.extra_notes,
        }
    }

    /// Read a single field
    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Language => &self.language,
            EditField::Tags => &self.tags_text,
            EditField::Content => &self.content,
            EditField::ExtraNotes => &self.extra_notes,
        }
    }

    /// Tags split on `,`, trimmed, empty entries dropped, duplicates removed
    /// (case-sensitive, first occurrence wins)
    pub fn parsed_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags_text.split(',').map(str::trim) {
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Validate the form and build the request body
    pub fn validate(&self) -> Result<SnippetUpdate, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let language = match self.language.trim() {
            "" => None,
            text => Some(
                SnippetLanguage::parse(text)
                    .ok_or_else(|| ValidationError::UnknownLanguage(text.to_string()))?,
            ),
        };

        Ok(SnippetUpdate {
            snippet_name: name.to_string(),
            content: self.content.clone(),
            extra_notes: self.extra_notes.clone(),
            language,
            tags: self.parsed_tags(),
        })
    }
}
