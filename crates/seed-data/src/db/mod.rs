//! Seeding recipes into a document store.
//!
//! The [`Seeder`] inserts a catalog one recipe at a time and reports the
//! generated ids.

mod seeder;

pub use seeder::{InsertedRecipe, SeedError, SeedReport, Seeder};
