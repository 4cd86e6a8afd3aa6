//! In-process document store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Document, DocumentId, DocumentStore, StoreError};

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<(DocumentId, Document)>>,
    inserted: usize,
}

/// Keeps documents in memory, in insertion order per collection.
///
/// Can be configured to start failing after a number of successful inserts,
/// which stands in for an emulator that goes away mid-run.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail_after: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `successes` inserts, then rejects every later one.
    pub fn failing_after(successes: usize) -> Self {
        Self {
            inner: Mutex::default(),
            fail_after: Some(successes),
        }
    }

    /// Rejects every insert.
    pub fn unreachable() -> Self {
        Self::failing_after(0)
    }

    /// Snapshot of the documents in `collection`.
    pub async fn documents(&self, collection: &str) -> Vec<(DocumentId, Document)> {
        self.inner
            .lock()
            .await
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.inner
            .lock()
            .await
            .collections
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        let mut inner = self.inner.lock().await;

        if self.fail_after.is_some_and(|limit| inner.inserted >= limit) {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let id = DocumentId::generate(&mut rand::thread_rng());
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), document));
        inner.inserted += 1;

        Ok(id)
    }
}
