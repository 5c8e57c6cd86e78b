//! Response envelopes of the catalog API and the image host.

use serde::{Deserialize, Serialize};

/// `GET /categories`, `GET /animals` → `{ "data": [...] }`
///
/// A missing or `null` `data` key decodes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `POST /categories`, `POST /animals` → `{ "success": bool }`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub success: bool,
}

/// Image host upload → `{ "url": "..." }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub url: Option<String>,
}

impl UploadReceipt {
    /// The hosted URL, if the host returned a non-empty one
    pub fn hosted_url(self) -> Option<String> {
        self.url.filter(|u| !u.is_empty())
    }
}
