//! Recipe document schema for the Masakini app.
//!
//! These types describe the documents stored in the `recipes` collection and
//! read back by the mobile client. Field names on the wire are camelCase.

pub mod models;

pub use models::{Author, Category, Difficulty, Recipe, Review, UserId};
