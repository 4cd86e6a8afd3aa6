//! Sequential recipe seeding.

use recipes::Category;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalog::{CatalogError, SampleRecipe};
use crate::store::{Document, DocumentId, DocumentStore, StoreError};

/// Collection the app reads recipes from.
pub const RECIPES_COLLECTION: &str = "recipes";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Failed to insert recipe {title:?}: {source}")]
    Insert {
        title: String,
        #[source]
        source: StoreError,
    },
}

/// A recipe that made it into the store.
#[derive(Debug, Clone)]
pub struct InsertedRecipe {
    pub id: DocumentId,
    pub title: String,
    pub category: Category,
    pub created_at: OffsetDateTime,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub started_at: OffsetDateTime,
    pub inserted: Vec<InsertedRecipe>,
}

impl SeedReport {
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Inserts catalog recipes into a document store.
///
/// The seeder owns its store; dropping the seeder releases the connection.
pub struct Seeder<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a seeder targeting the `recipes` collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: RECIPES_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Inserts every recipe in order, awaiting each insert before the next.
    ///
    /// Each recipe is stamped with `createdAt` just before its insert; stamps
    /// never go backwards within a run. The first failed insert aborts the
    /// run. Recipes inserted before it stay in the store.
    pub async fn run(&self, catalog: Vec<SampleRecipe>) -> Result<SeedReport, SeedError> {
        let started_at = OffsetDateTime::now_utc();
        debug!(
            "Seeding {} recipes into {}...",
            catalog.len(),
            self.collection
        );

        let mut inserted = Vec::with_capacity(catalog.len());
        let mut last_stamp = started_at;

        for sample in catalog {
            let created_at = OffsetDateTime::now_utc().max(last_stamp);
            last_stamp = created_at;

            let recipe = sample.into_recipe(created_at);
            let id = self
                .store
                .create_document(&self.collection, Document::from(&recipe))
                .await
                .map_err(|source| SeedError::Insert {
                    title: recipe.title.clone(),
                    source,
                })?;

            info!("Added {} ({}) - ID: {}", recipe.title, recipe.category, id);

            inserted.push(InsertedRecipe {
                id,
                title: recipe.title,
                category: recipe.category,
                created_at,
            });
        }

        Ok(SeedReport {
            started_at,
            inserted,
        })
    }

    /// Returns a reference to the store for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }
}
