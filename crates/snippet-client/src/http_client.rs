//! reqwest-based snippet service client
//!
//! Direct implementation of the `SnippetClient` trait over HTTP.
//! Session cookies set by the service are kept in the client's cookie store
//! and sent with every request.

use crate::client::SnippetClient;
use crate::error::ClientError;
use crate::types::{
    CompareResponse, Page, PageRequest, Snippet, SnippetId, SnippetPreview, SnippetUpdate,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Error document sent by the service on failures
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP snippet service client
#[derive(Debug, Clone)]
pub struct HttpSnippetClient {
    base_url: String,
    http_client: Client,
}

impl HttpSnippetClient {
    /// Create a client builder
    pub fn builder() -> HttpSnippetClientBuilder {
        HttpSnippetClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn snippet_url(&self, id: SnippetId) -> String {
        format!("{}/snippets/{}", self.base_url, id)
    }

    /// Map a response to the decoded body or the matching error
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Turn non-success statuses into errors, passing successful responses through
    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            _ => {
                // The error body is optional; a missing or malformed one still
                // yields a rejection, just without a message.
                let message = response
                    .bytes()
                    .await
                    .ok()
                    .and_then(|body| serde_json::from_slice::<ApiErrorBody>(&body).ok())
                    .and_then(|body| body.message);
                Err(ClientError::Rejected {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl SnippetClient for HttpSnippetClient {
    async fn fetch_snippet(&self, id: SnippetId) -> Result<Snippet, ClientError> {
        debug!("Fetching snippet {}", id);
        let response = self.http_client.get(self.snippet_url(id)).send().await?;
        Self::decode(response).await
    }

    async fn update_snippet(
        &self,
        id: SnippetId,
        update: &SnippetUpdate,
    ) -> Result<Snippet, ClientError> {
        debug!("Updating snippet {}", id);
        let response = self
            .http_client
            .put(self.snippet_url(id))
            .json(update)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_snippet(&self, id: SnippetId) -> Result<(), ClientError> {
        debug!("Deleting snippet {}", id);
        let response = self.http_client.delete(self.snippet_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn compare_snippets(
        &self,
        id: SnippetId,
        other_id: SnippetId,
    ) -> Result<CompareResponse, ClientError> {
        debug!("Comparing snippet {} with {}", id, other_id);
        let url = format!("{}/compare/{}", self.snippet_url(id), other_id);
        let response = self.http_client.get(url).send().await?;
        Self::decode(response).await
    }

    async fn list_snippets(
        &self,
        request: &PageRequest,
    ) -> Result<Page<SnippetPreview>, ClientError> {
        debug!(
            "Listing snippets page {} (size {}, sort {})",
            request.page, request.size, request.sort
        );
        let url = format!("{}/snippets", self.base_url);
        let response = self
            .http_client
            .get(url)
            .query(&request.query_pairs())
            .send()
            .await?;
        Self::decode(response).await
    }
}

/// Builder for [`HttpSnippetClient`]
#[derive(Debug, Default)]
pub struct HttpSnippetClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HttpSnippetClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpSnippetClient, ClientError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let http_client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpSnippetClient {
            base_url,
            http_client,
        })
    }
}
