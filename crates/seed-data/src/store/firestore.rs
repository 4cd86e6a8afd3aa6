//! Firestore emulator client over the REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Document, DocumentId, DocumentStore, StoreError};
use crate::config::EmulatorConfig;

/// Response from the create-document endpoint.
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    /// Full resource name ending in `/{collection}/{id}`.
    name: String,
}

/// Store backed by a running Firestore emulator.
///
/// The HTTP client is created once and reused for every insert.
pub struct FirestoreEmulator {
    client: Client,
    config: EmulatorConfig,
}

impl FirestoreEmulator {
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// REST endpoint for adding documents to `collection`.
    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url(),
            self.config.documents_path(),
            collection
        )
    }
}

/// Extracts the document id from a resource name.
fn document_id_from_name(name: &str) -> Option<DocumentId> {
    name.rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(DocumentId::new)
}

#[async_trait]
impl DocumentStore for FirestoreEmulator {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        let url = self.collection_url(collection);
        debug!("POST {url} ({} fields)", document.fields.len());

        let mut request = self.client.post(&url).json(&document);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let created: CreatedDocument = resp
            .json()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

        document_id_from_name(&created.name).ok_or_else(|| {
            StoreError::MalformedResponse(format!("No document id in name {:?}", created.name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let store = FirestoreEmulator::new(EmulatorConfig::default());
        assert_eq!(
            store.collection_url("recipes"),
            "http://localhost:8081/v1/projects/masakini-ba32a/databases/(default)/documents/recipes"
        );
    }

    #[test]
    fn test_document_id_from_name() {
        let id = document_id_from_name(
            "projects/masakini-ba32a/databases/(default)/documents/recipes/Xk3pQ9aB7cD2eF4gH6iJ",
        );
        assert_eq!(id, Some(DocumentId::new("Xk3pQ9aB7cD2eF4gH6iJ")));

        assert_eq!(document_id_from_name("projects/p/documents/recipes/"), None);
        assert_eq!(document_id_from_name(""), None);
    }
}
