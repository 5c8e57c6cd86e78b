use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a server-owned record.
///
/// Ids are assigned by the catalog API and are opaque to the client: they are
/// only ever compared for equality and echoed back in request bodies.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way the API expects it
    fn as_string(&self) -> String;

    /// Wrap an id received from the API or from a form control
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty id".to_string());
        }
        Ok(s.to_string())
    }
}
