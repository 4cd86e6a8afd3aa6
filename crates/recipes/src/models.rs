use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier of a user account owned by the app's auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cuisine grouping shown as filter chips in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Indonesian,
    Western,
    Chinese,
    Japanese,
    Korean,
    Thai,
    Dessert,
    Minuman,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Indonesian,
        Category::Western,
        Category::Chinese,
        Category::Japanese,
        Category::Korean,
        Category::Thai,
        Category::Dessert,
        Category::Minuman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Indonesian => "Indonesian",
            Category::Western => "Western",
            Category::Chinese => "Chinese",
            Category::Japanese => "Japanese",
            Category::Korean => "Korean",
            Category::Thai => "Thai",
            Category::Dessert => "Dessert",
            Category::Minuman => "Minuman",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribution shown on the recipe card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: UserId,
    pub user_name: String,
    pub user_avatar: String,
}

/// A user review attached to a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub user_id: UserId,
    pub user_name: String,
    pub rating: f64,
    pub comment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A recipe document as stored in the `recipes` collection.
///
/// Ratings are kept as individual scores; [`Recipe::average_rating`] gives
/// the single value the app displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image: String,
    #[serde(flatten)]
    pub author: Author,
    pub category: Category,
    /// Minutes.
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub favorites: Vec<UserId>,
    pub ratings: Vec<f64>,
    pub reviews: Vec<Review>,
}

impl Recipe {
    /// Mean of all ratings, or `None` for an unrated recipe.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
    }
}
