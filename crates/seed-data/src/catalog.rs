//! Compiled-in sample recipe catalogs.

use recipes::{Author, Category, Difficulty, Recipe};
use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;

const CLASSIC_JSON: &str = include_str!("../data/classic.json");
const BY_CATEGORY_JSON: &str = include_str!("../data/by_category.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid {catalog} catalog: {source}")]
    Parse {
        catalog: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Which sample set to seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// First sample set: fifteen recipes, mostly Indonesian.
    Classic,
    /// Eighteen recipes covering every category chip in the app.
    ByCategory,
}

impl Catalog {
    pub fn name(&self) -> &'static str {
        match self {
            Catalog::Classic => "classic",
            Catalog::ByCategory => "by-category",
        }
    }

    /// Parses the catalog, preserving file order.
    pub fn load(&self) -> Result<Vec<SampleRecipe>, CatalogError> {
        let raw = match self {
            Catalog::Classic => CLASSIC_JSON,
            Catalog::ByCategory => BY_CATEGORY_JSON,
        };
        serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
            catalog: self.name(),
            source,
        })
    }
}

/// Catalog entry: a recipe before it has been stamped for insertion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image: String,
    pub author: Author,
    pub category: Category,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ratings: Vec<f64>,
}

impl SampleRecipe {
    /// Builds the stored document with no favorites or reviews yet.
    pub fn into_recipe(self, created_at: OffsetDateTime) -> Recipe {
        Recipe {
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            steps: self.steps,
            image: self.image,
            author: self.author,
            category: self.category,
            cooking_time: self.cooking_time,
            servings: self.servings,
            difficulty: self.difficulty,
            created_at,
            favorites: Vec::new(),
            ratings: self.ratings,
            reviews: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_classic_catalog() {
        let recipes = Catalog::Classic.load().unwrap();

        assert_eq!(recipes.len(), 15);
        assert_eq!(recipes[0].title, "Nasi Goreng Spesial");
        assert_eq!(recipes[1].title, "Rendang Daging Sapi");
        assert_eq!(recipes[0].category, Category::Indonesian);
        // Single averaged score in this set
        assert!(recipes.iter().all(|r| r.ratings.len() == 1));
    }

    #[test]
    fn test_by_category_covers_categories() {
        let recipes = Catalog::ByCategory.load().unwrap();
        assert_eq!(recipes.len(), 18);

        let categories: HashSet<_> = recipes.iter().map(|r| r.category).collect();
        for expected in [
            Category::Indonesian,
            Category::Western,
            Category::Chinese,
            Category::Japanese,
            Category::Korean,
            Category::Dessert,
            Category::Minuman,
        ] {
            assert!(categories.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_entries_are_complete() {
        for catalog in [Catalog::Classic, Catalog::ByCategory] {
            for recipe in catalog.load().unwrap() {
                assert!(!recipe.title.is_empty());
                assert!(!recipe.ingredients.is_empty(), "{}", recipe.title);
                assert!(!recipe.steps.is_empty(), "{}", recipe.title);
                assert!(recipe.image.starts_with("https://"));
                assert!(recipe.cooking_time > 0);
                assert!(recipe.servings > 0);
                assert!(!recipe.ratings.is_empty());
            }
        }
    }

    #[test]
    fn test_into_recipe_starts_without_interactions() {
        let sample = Catalog::ByCategory.load().unwrap().remove(0);
        let created_at = OffsetDateTime::now_utc();
        let recipe = sample.clone().into_recipe(created_at);

        assert_eq!(recipe.title, sample.title);
        assert_eq!(recipe.ratings, sample.ratings);
        assert_eq!(recipe.created_at, created_at);
        assert!(recipe.favorites.is_empty());
        assert!(recipe.reviews.is_empty());
    }
}
