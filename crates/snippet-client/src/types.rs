//! Snippet service data transfer objects
//!
//! These types mirror the JSON documents exchanged with the snippet service.
//! They are intentionally separate from the rendering models of the viewer
//! crates to keep this crate pure and reusable.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Server-assigned snippet identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(pub i64);

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SnippetId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Declared language of a snippet
///
/// Unknown language strings sent by the service are read as [`SnippetLanguage::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SnippetLanguage {
    Java,
    #[serde(other)]
    Other,
}

impl SnippetLanguage {
    /// All languages in the order they are offered to users
    pub const ALL: [SnippetLanguage; 2] = [SnippetLanguage::Java, SnippetLanguage::Other];

    /// Wire representation (e.g. `"JAVA"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetLanguage::Java => "JAVA",
            SnippetLanguage::Other => "OTHER",
        }
    }

    /// Parse a wire or user supplied value, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for SnippetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored snippet as returned by `GET /snippets/{id}` and `PUT /snippets/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Snippet ID (immutable)
    pub id: SnippetId,

    /// Display name
    pub name: String,

    /// Declared language, unset when the author did not pick one
    #[serde(default)]
    pub language: Option<SnippetLanguage>,

    /// Tags, deduplicated case-sensitively
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeSet<String>,

    /// Code content (may be empty)
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Free text notes, rendered as markdown
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra_notes: String,

    /// Whether the snippet is still a draft
    #[serde(default)]
    pub is_draft: bool,

    /// When the snippet was created (server time)
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,

    /// When the snippet was last updated (server time)
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

/// Body of `PUT /snippets/{id}`
///
/// The service replaces the whole record with these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetUpdate {
    pub snippet_name: String,
    pub content: String,
    pub extra_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<SnippetLanguage>,
    pub tags: Vec<String>,
}

/// Snippet summary as listed by `GET /snippets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPreview {
    pub id: SnippetId,
    pub name: String,
    #[serde(default)]
    pub language: Option<SnippetLanguage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Paginated response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items of the requested page
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,

    /// Page metadata (newer service versions nest it)
    #[serde(default)]
    pub page: Option<PageMetadata>,

    /// Total page count (older service versions put it at the top level)
    #[serde(default)]
    pub total_pages: Option<u64>,
}

impl<T> Page<T> {
    /// Total number of pages, whichever representation the service used
    pub fn total_pages(&self) -> u64 {
        self.page
            .as_ref()
            .map(|p| p.total_pages)
            .or(self.total_pages)
            .unwrap_or(1)
    }
}

/// Page metadata block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    pub size: u64,
    pub number: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Query of `GET /snippets`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Spring style sort expression, e.g. `createdAt,DESC`
    pub sort: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: "updatedAt,DESC".to_string(),
        }
    }
}

impl PageRequest {
    /// First page with the given size and sort
    pub fn first(size: u32, sort: impl Into<String>) -> Self {
        Self {
            page: 0,
            size,
            sort: sort.into(),
        }
    }

    /// Query string pairs in request order
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
        ]
    }
}

/// Body of `GET /snippets/{id}/compare/{otherId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub comparing: DiffSideResponse,
    pub comparing_to: DiffSideResponse,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSideResponse {
    pub snippet_name: String,
    #[serde(default = "Vec::new")]
    pub lines: Vec<DiffLineResponse>,
}

/// A single line of one side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLineResponse {
    pub line_num: u32,
    pub line_type: LineTypeResponse,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_content: String,
}

/// Line tag of a comparison line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineTypeResponse {
    Unchanged,
    Added,
    Removed,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
