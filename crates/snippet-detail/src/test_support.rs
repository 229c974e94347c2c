//! In-memory snippet service for tests

use async_trait::async_trait;
use snippet_client::{
    ClientError, CompareResponse, DiffLineResponse, DiffSideResponse, LineTypeResponse, Page,
    PageRequest, Snippet, SnippetClient, SnippetId, SnippetLanguage, SnippetPreview,
    SnippetUpdate,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

pub fn snippet(id: i64, name: &str) -> Snippet {
    Snippet {
        id: SnippetId(id),
        name: name.to_string(),
        language: Some(SnippetLanguage::Java),
        tags: ["util".to_string()].into_iter().collect(),
        content: format!("class S{} {{}}", id),
        extra_notes: "Some *notes*".to_string(),
        is_draft: false,
        created_at: None,
        last_updated: None,
    }
}

pub fn preview(id: i64, name: &str) -> SnippetPreview {
    SnippetPreview {
        id: SnippetId(id),
        name: name.to_string(),
        language: None,
        tags: Default::default(),
        created_at: None,
    }
}

/// Snippet service backed by a map, with injectable failures and delays
#[derive(Default)]
pub struct MockClient {
    snippets: Mutex<BTreeMap<SnippetId, Snippet>>,
    /// Error returned by every call of the named operation
    failures: Mutex<BTreeMap<&'static str, ClientError>>,
    /// Delay before answering every call of the named operation
    delays: Mutex<BTreeMap<&'static str, Duration>>,
    /// Delay before answering a compare against the given snippet
    compare_delays: Mutex<BTreeMap<SnippetId, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        let client = Self::default();
        if let Ok(mut map) = client.snippets.lock() {
            map.extend(snippets.into_iter().map(|s| (s.id, s)));
        }
        client
    }

    /// Make `operation` ("fetch", "update", "delete", "compare", "list") fail
    pub fn fail(self, operation: &'static str, error: ClientError) -> Self {
        self.failures.lock().unwrap().insert(operation, error);
        self
    }

    /// Make `operation` answer only after `delay`
    pub fn delay(self, operation: &'static str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(operation, delay);
        self
    }

    pub fn delay_compare(self, other: i64, delay: Duration) -> Self {
        self.compare_delays
            .lock()
            .unwrap()
            .insert(SnippetId(other), delay);
        self
    }

    /// Calls made so far, e.g. `["fetch 1", "compare 1 2"]`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(' ').next() == Some(operation))
            .count()
    }

    async fn pause(&self, operation: &'static str) {
        let delay = self.delays.lock().unwrap().get(operation).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn get(&self, id: SnippetId) -> Result<Snippet, ClientError> {
        self.snippets
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ClientError::NotFound)
    }
}

fn side(snippet: &Snippet, line_type: LineTypeResponse) -> DiffSideResponse {
    DiffSideResponse {
        snippet_name: snippet.name.clone(),
        lines: snippet
            .content
            .split('\n')
            .enumerate()
            .map(|(i, line)| DiffLineResponse {
                line_num: i as u32 + 1,
                line_type,
                line_content: line.to_string(),
            })
            .collect(),
    }
}

#[async_trait]
impl SnippetClient for MockClient {
    async fn fetch_snippet(&self, id: SnippetId) -> Result<Snippet, ClientError> {
        self.pause("fetch").await;
        self.record("fetch", format!("fetch {}", id))?;
        self.get(id)
    }

    async fn update_snippet(
        &self,
        id: SnippetId,
        update: &SnippetUpdate,
    ) -> Result<Snippet, ClientError> {
        self.pause("update").await;
        self.record("update", format!("update {}", id))?;
        let mut snippet = self.get(id)?;
        snippet.name = update.snippet_name.clone();
        snippet.content = update.content.clone();
        snippet.extra_notes = update.extra_notes.clone();
        snippet.language = update.language;
        snippet.tags = update.tags.iter().cloned().collect();
        self.snippets.lock().unwrap().insert(id, snippet.clone());
        Ok(snippet)
    }

    async fn delete_snippet(&self, id: SnippetId) -> Result<(), ClientError> {
        self.pause("delete").await;
        self.record("delete", format!("delete {}", id))?;
        self.snippets
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(ClientError::NotFound)
    }

    async fn compare_snippets(
        &self,
        id: SnippetId,
        other_id: SnippetId,
    ) -> Result<CompareResponse, ClientError> {
        let delay = self.compare_delays.lock().unwrap().get(&other_id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.record("compare", format!("compare {} {}", id, other_id))?;
        let comparing = self.get(id)?;
        let comparing_to = self.get(other_id)?;
        Ok(CompareResponse {
            comparing: side(&comparing, LineTypeResponse::Removed),
            comparing_to: side(&comparing_to, LineTypeResponse::Added),
        })
    }

    async fn list_snippets(
        &self,
        request: &PageRequest,
    ) -> Result<Page<SnippetPreview>, ClientError> {
        self.pause("list").await;
        self.record("list", format!("list {}", request.size))?;
        let content = self
            .snippets
            .lock()
            .unwrap()
            .values()
            .map(|s| SnippetPreview {
                id: s.id,
                name: s.name.clone(),
                language: s.language,
                tags: s.tags.clone(),
                created_at: s.created_at,
            })
            .collect();
        Ok(Page {
            content,
            page: None,
            total_pages: Some(1),
        })
    }
}
