//! Endpoint configuration for the catalog client.
//!
//! The application has no runtime configuration surface: every endpoint is a
//! compile-time constant, bundled into [`CatalogConfig::default`].

/// Base URL of the catalog API
pub const API_BASE: &str = "https://antropolis.vercel.app/api/V1";

/// Unsigned upload endpoint of the image host
pub const UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/dbukuhw7w/image/upload";

/// Upload preset sent alongside every image
pub const UPLOAD_PRESET: &str = "nextjs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base: String,
    pub upload_url: String,
    pub upload_preset: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            upload_url: UPLOAD_URL.to_string(),
            upload_preset: UPLOAD_PRESET.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```ignore
    /// let url = config.api_url("/animals");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn categories_url(&self) -> String {
        self.api_url("/categories")
    }

    pub fn animals_url(&self) -> String {
        self.api_url("/animals")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.categories_url(),
            "https://antropolis.vercel.app/api/V1/categories"
        );
        assert_eq!(
            config.animals_url(),
            "https://antropolis.vercel.app/api/V1/animals"
        );
        assert_eq!(config.upload_preset, "nextjs");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let config = CatalogConfig {
            api_base: "http://localhost:3000/api/V1/".to_string(),
            ..CatalogConfig::default()
        };
        assert_eq!(config.animals_url(), "http://localhost:3000/api/V1/animals");
    }
}
