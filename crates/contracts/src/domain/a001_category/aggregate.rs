use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(CategoryId)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Named grouping that animals point at through `categoryId`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub title: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /categories`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub title: String,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("Please enter a category name".into());
        }
        Ok(())
    }
}
