//! Data Source Gateway: every network call the catalog depends on.
//!
//! Calls are single-shot: no batching, no retries, no timeouts.

pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpGateway;

use crate::shared::error::GatewayResult;
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_animal::aggregate::{Animal, AnimalDto};

/// Futures are `?Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait CatalogGateway: Send + Sync {
    /// File handle accepted by [`CatalogGateway::upload_image`]
    type Upload: 'static;

    async fn fetch_categories(&self) -> GatewayResult<Vec<Category>>;

    async fn fetch_animals(&self) -> GatewayResult<Vec<Animal>>;

    /// `Ok(false)` when the API answered with `success: false`
    async fn create_category(&self, dto: &CategoryDto) -> GatewayResult<bool>;

    async fn create_animal(&self, dto: &AnimalDto) -> GatewayResult<bool>;

    /// Uploads to the image host and returns the hosted URL
    async fn upload_image(&self, file: Self::Upload) -> GatewayResult<String>;

    /// Read failures are logged and degrade to an empty list.
    async fn list_categories(&self) -> Vec<Category> {
        match self.fetch_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                log::error!("Error fetching categories: {}", e);
                Vec::new()
            }
        }
    }

    async fn list_animals(&self) -> Vec<Animal> {
        match self.fetch_animals().await {
            Ok(animals) => animals,
            Err(e) => {
                log::error!("Error fetching animals: {}", e);
                Vec::new()
            }
        }
    }
}
