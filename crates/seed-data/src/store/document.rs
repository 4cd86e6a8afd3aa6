//! Firestore REST encoding of documents.
//!
//! Every value is wrapped in a single-key object naming its type, e.g.
//! `{"stringValue": "Rendang"}` or `{"integerValue": "180"}`.

use std::collections::BTreeMap;

use recipes::{Author, Recipe, Review, UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a decimal string.
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    StringValue(String),
    ArrayValue {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        values: Vec<FieldValue>,
    },
    MapValue {
        #[serde(default)]
        fields: BTreeMap<String, FieldValue>,
    },
}

impl FieldValue {
    pub fn string(value: impl Into<String>) -> Self {
        FieldValue::StringValue(value.into())
    }

    pub fn integer(value: i64) -> Self {
        FieldValue::IntegerValue(value.to_string())
    }

    pub fn array<T>(items: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<FieldValue>,
    {
        FieldValue::ArrayValue {
            values: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::StringValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::IntegerValue(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            FieldValue::TimestampValue(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::ArrayValue { values } => Some(values),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::StringValue(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::StringValue(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::DoubleValue(value)
    }
}

impl From<OffsetDateTime> for FieldValue {
    fn from(value: OffsetDateTime) -> Self {
        FieldValue::TimestampValue(value)
    }
}

impl From<&UserId> for FieldValue {
    fn from(value: &UserId) -> Self {
        FieldValue::string(value.as_str())
    }
}

impl From<&Review> for FieldValue {
    fn from(review: &Review) -> Self {
        let fields = BTreeMap::from([
            ("userId".to_string(), FieldValue::from(&review.user_id)),
            ("userName".to_string(), FieldValue::string(&review.user_name)),
            ("rating".to_string(), FieldValue::DoubleValue(review.rating)),
            ("comment".to_string(), FieldValue::string(&review.comment)),
            (
                "createdAt".to_string(),
                FieldValue::TimestampValue(review.created_at),
            ),
        ]);
        FieldValue::MapValue { fields }
    }
}

/// The `fields` body of a Firestore document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }
}

impl From<&Recipe> for Document {
    fn from(recipe: &Recipe) -> Self {
        let Author {
            user_id,
            user_name,
            user_avatar,
        } = &recipe.author;

        Document::new()
            .with("title", recipe.title.as_str())
            .with("description", recipe.description.as_str())
            .with(
                "ingredients",
                FieldValue::array(recipe.ingredients.iter().map(String::as_str)),
            )
            .with(
                "steps",
                FieldValue::array(recipe.steps.iter().map(String::as_str)),
            )
            .with("image", recipe.image.as_str())
            .with("userId", user_id)
            .with("userName", user_name.as_str())
            .with("userAvatar", user_avatar.as_str())
            .with("category", recipe.category.as_str())
            .with("cookingTime", FieldValue::integer(recipe.cooking_time.into()))
            .with("servings", FieldValue::integer(recipe.servings.into()))
            .with("difficulty", recipe.difficulty.as_str())
            .with("createdAt", recipe.created_at)
            .with("favorites", FieldValue::array(recipe.favorites.iter()))
            .with("ratings", FieldValue::array(recipe.ratings.iter().copied()))
            .with("reviews", FieldValue::array(recipe.reviews.iter()))
    }
}

#[cfg(test)]
mod tests {
    use recipes::{Category, Difficulty};
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    fn rendang() -> Recipe {
        Recipe {
            title: "Rendang Daging Sapi".to_string(),
            description: "Rendang khas Padang".to_string(),
            ingredients: vec![
                "500g daging sapi".to_string(),
                "400ml santan".to_string(),
            ],
            steps: vec!["Tumis bumbu halus".to_string()],
            image: "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=500".to_string(),
            author: Author {
                user_id: UserId::new("sample-user"),
                user_name: "Chef Siti".to_string(),
                user_avatar: "https://ui-avatars.com/api/?name=Chef+Siti".to_string(),
            },
            category: Category::Indonesian,
            cooking_time: 180,
            servings: 4,
            difficulty: Difficulty::Hard,
            created_at: datetime!(2025-03-01 08:30:00 UTC),
            favorites: Vec::new(),
            ratings: vec![5.0, 4.5],
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_recipe_document_fields() {
        let doc = Document::from(&rendang());

        assert_eq!(doc.fields.len(), 16);
        assert_eq!(doc.get_str("title"), Some("Rendang Daging Sapi"));
        assert_eq!(doc.get_str("userId"), Some("sample-user"));
        assert_eq!(doc.get_str("category"), Some("Indonesian"));
        assert_eq!(doc.get_str("difficulty"), Some("hard"));
        assert_eq!(
            doc.get("cookingTime").and_then(FieldValue::as_integer),
            Some(180)
        );
        assert_eq!(
            doc.get("ingredients")
                .and_then(FieldValue::as_array)
                .map(<[_]>::len),
            Some(2)
        );
        assert_eq!(
            doc.get("favorites").and_then(FieldValue::as_array),
            Some(&[][..])
        );
    }

    #[test]
    fn test_wire_encoding() {
        let body = serde_json::to_value(Document::from(&rendang())).unwrap();
        let fields = &body["fields"];

        assert_eq!(fields["title"], json!({"stringValue": "Rendang Daging Sapi"}));
        assert_eq!(fields["servings"], json!({"integerValue": "4"}));
        assert_eq!(
            fields["createdAt"],
            json!({"timestampValue": "2025-03-01T08:30:00Z"})
        );
        assert_eq!(
            fields["ratings"],
            json!({"arrayValue": {"values": [{"doubleValue": 5.0}, {"doubleValue": 4.5}]}})
        );
        assert_eq!(fields["reviews"], json!({"arrayValue": {}}));
    }

    #[test]
    fn test_review_encodes_as_map() {
        let review = Review {
            user_id: UserId::new("u-1"),
            user_name: "Rina".to_string(),
            rating: 4.0,
            comment: "Enak!".to_string(),
            created_at: datetime!(2025-03-02 10:00:00 UTC),
        };

        let value = serde_json::to_value(FieldValue::from(&review)).unwrap();
        let fields = &value["mapValue"]["fields"];
        assert_eq!(fields["comment"], json!({"stringValue": "Enak!"}));
        assert_eq!(fields["rating"], json!({"doubleValue": 4.0}));
    }

    #[test]
    fn test_decodes_emulator_response_fields() {
        let raw = json!({
            "fields": {
                "title": {"stringValue": "Es Teh"},
                "servings": {"integerValue": "1"},
                "favorites": {"arrayValue": {}},
                "extra": {"nullValue": null}
            }
        });

        let doc: Document = serde_json::from_value(raw).unwrap();
        assert_eq!(doc.get_str("title"), Some("Es Teh"));
        assert_eq!(
            doc.get("servings").and_then(FieldValue::as_integer),
            Some(1)
        );
        assert_eq!(doc.get("extra"), Some(&FieldValue::NullValue(())));
    }
}
