use crate::domain::a001_category::aggregate::CategoryId;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

/// Server-assigned animal identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(pub String);

impl AnimalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for AnimalId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(AnimalId)
    }
}

/// Catalog entry shown as a card
///
/// `category_id` is a plain reference: the client never checks that the
/// category exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    #[serde(rename = "_id")]
    pub id: AnimalId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Animal {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: AnimalId::new(id),
            title: title.into(),
            image: image.into(),
            category_id: CategoryId::new(category_id),
        }
    }

    pub fn belongs_to(&self, category_id: &CategoryId) -> bool {
        &self.category_id == category_id
    }
}

/// Body of `POST /animals`
///
/// Empty strings stand for "not provided yet"; the form fills `image` only
/// after the upload has resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalDto {
    pub title: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub image: String,
}

impl AnimalDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() || self.category_id.is_empty() || self.image.is_empty() {
            return Err("Please fill out all fields".into());
        }
        Ok(())
    }
}
