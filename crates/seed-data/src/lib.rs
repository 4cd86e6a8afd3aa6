//! Sample recipe seeding for the Masakini Firestore emulator.
//!
//! Loads one of the compiled-in recipe catalogs and adds each recipe as a new
//! document in the emulator's `recipes` collection, so the mobile app has
//! something to show during manual testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let store = FirestoreEmulator::new(EmulatorConfig::default());
//! let report = Seeder::new(store).run(Catalog::Classic.load()?).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod store;

use std::collections::BTreeSet;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::config::EmulatorConfig;
use crate::db::{SeedError, SeedReport, Seeder};

/// Process status after every recipe was inserted.
pub const EXIT_SUCCESS: u8 = 0;
/// Process status after a failed run.
pub const EXIT_FAILURE: u8 = 1;
use crate::store::FirestoreEmulator;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{Catalog, CatalogError, SampleRecipe};
    pub use crate::config::EmulatorConfig;
    pub use crate::db::{InsertedRecipe, SeedError, SeedReport, Seeder};
    pub use crate::store::{
        Document, DocumentId, DocumentStore, FieldValue, FirestoreEmulator, MemoryStore,
        StoreError,
    };
    pub use recipes::{Author, Category, Difficulty, Recipe, Review, UserId};
}

/// Installs the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Seeds `catalog` into the emulator described by `config`.
///
/// The emulator connection lives only for the duration of the call.
pub async fn seed_emulator(
    catalog: Catalog,
    config: &EmulatorConfig,
) -> Result<SeedReport, SeedError> {
    let recipes = catalog.load()?;
    let seeder = Seeder::new(FirestoreEmulator::new(config.clone()))
        .with_collection(config.collection.clone());
    seeder.run(recipes).await
}

/// Seeds `catalog`, logs the outcome and returns the process exit status.
///
/// Success logs a single summary line after the per-recipe lines and
/// returns [`EXIT_SUCCESS`]. Failure logs a single error line and returns
/// [`EXIT_FAILURE`].
pub async fn seed_and_report(catalog: Catalog, config: &EmulatorConfig) -> u8 {
    debug!(
        "Adding {} recipes to the Firestore emulator at {}:{}...",
        catalog.name(),
        config.host,
        config.port
    );

    match seed_emulator(catalog, config).await {
        Ok(report) => {
            let categories: BTreeSet<_> =
                report.inserted.iter().map(|r| r.category.as_str()).collect();
            info!(
                "All {} {} recipes added across {} categories. Refresh the app or check {}",
                report.len(),
                catalog.name(),
                categories.len(),
                config.ui_url()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("Error: {e}");
            EXIT_FAILURE
        }
    }
}
