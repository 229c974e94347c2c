//! Snippet service client trait
//!
//! This module defines the core `SnippetClient` trait that all client
//! implementations must satisfy.

use crate::error::ClientError;
use crate::types::{
    CompareResponse, Page, PageRequest, Snippet, SnippetId, SnippetPreview, SnippetUpdate,
};
use async_trait::async_trait;

/// Snippet service client trait
///
/// Defines the interface for interacting with the snippet service.
/// Every call is a single attempt: implementations must not retry.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use snippet_client::{SnippetClient, SnippetId};
///
/// async fn title(client: &dyn SnippetClient) -> Result<String, snippet_client::ClientError> {
///     Ok(client.fetch_snippet(SnippetId(1)).await?.name)
/// }
/// ```
#[async_trait]
pub trait SnippetClient: Send + Sync {
    /// Fetch a single snippet by ID
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] without a valid session,
    /// [`ClientError::NotFound`] when the snippet does not exist.
    async fn fetch_snippet(&self, id: SnippetId) -> Result<Snippet, ClientError>;

    /// Replace a snippet's editable fields
    ///
    /// # Returns
    ///
    /// The record as stored by the service after the update.
    async fn update_snippet(
        &self,
        id: SnippetId,
        update: &SnippetUpdate,
    ) -> Result<Snippet, ClientError>;

    /// Delete a snippet
    async fn delete_snippet(&self, id: SnippetId) -> Result<(), ClientError>;

    /// Compare two snippets line by line
    ///
    /// # Arguments
    ///
    /// * `id` - The snippet being compared (left side)
    /// * `other_id` - The snippet compared against (right side)
    async fn compare_snippets(
        &self,
        id: SnippetId,
        other_id: SnippetId,
    ) -> Result<CompareResponse, ClientError>;

    /// List one page of the user's snippets
    async fn list_snippets(
        &self,
        request: &PageRequest,
    ) -> Result<Page<SnippetPreview>, ClientError>;
}
