//! Snippet service API client
//!
//! This crate provides a trait-based client for the snippet service REST API.
//! Consumers program against the [`SnippetClient`] trait so the HTTP
//! implementation can be swapped for an in-memory one in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SnippetClient trait                 │
//! │  - fetch_snippet()                               │
//! │  - update_snippet()                              │
//! │  - delete_snippet()                              │
//! │  - compare_snippets()                            │
//! │  - list_snippets()                               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │ HttpSnippetClient   │
//!             │ (reqwest)           │
//!             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use snippet_client::{HttpSnippetClient, SnippetClient, SnippetId};
//!
//! # async fn example() -> Result<(), snippet_client::ClientError> {
//! let client = HttpSnippetClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let snippet = client.fetch_snippet(SnippetId(42)).await?;
//! println!("{} ({} tags)", snippet.name, snippet.tags.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

/// Default base URL of the snippet service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub use client::SnippetClient;
pub use error::ClientError;
pub use http_client::{HttpSnippetClient, HttpSnippetClientBuilder};
pub use types::{
    CompareResponse, DiffLineResponse, DiffSideResponse, LineTypeResponse, Page, PageMetadata,
    PageRequest, Snippet, SnippetId, SnippetLanguage, SnippetPreview, SnippetUpdate,
};
