//! Document store seam.
//!
//! The [`Seeder`](crate::db::Seeder) only needs to create documents, so the
//! store abstraction is a single async call. [`FirestoreEmulator`] talks to
//! the local emulator over REST; [`MemoryStore`] keeps documents in-process.

mod document;
mod firestore;
mod memory;

use std::fmt;

use async_trait::async_trait;
use rand::Rng;
use rand::distributions::Alphanumeric;
use thiserror::Error;

pub use document::{Document, FieldValue};
pub use firestore::FirestoreEmulator;
pub use memory::MemoryStore;

/// Length of Firestore auto-generated document ids.
pub const AUTO_ID_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Store rejected document (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Store-assigned document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates an id shaped like Firestore's client-side auto ids.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let id: String = rng
            .sample_iter(&Alphanumeric)
            .take(AUTO_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A schema-less store holding documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds `document` to `collection` under a new generated id.
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError>;
}
