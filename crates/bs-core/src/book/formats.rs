//! Ordered format-to-URL mapping of a catalog record.
//!
//! The catalog returns formats as a JSON object. Resolution of the plain-text
//! rendition depends on the order of that object, so the mapping keeps the
//! wire order instead of sorting keys.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// MIME type key under which the catalog publishes the cover image.
pub const COVER_IMAGE_FORMAT: &str = "image/jpeg";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formats(IndexMap<String, String>);

impl Formats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a format, keeping the position of an existing key.
    pub fn insert(&mut self, format: impl Into<String>, url: impl Into<String>) {
        self.0.insert(format.into(), url.into());
    }

    /// Exact-key lookup.
    pub fn get(&self, format: &str) -> Option<&str> {
        self.0.get(format).map(String::as_str)
    }

    /// Iterate `(format, url)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, url)| (key.as_str(), url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Formats
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, url)| (key.into(), url.into()))
                .collect(),
        )
    }
}

/// `deserialize_with` helper: a `null` formats field reads as empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<Formats, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Formats>::deserialize(deserializer)?.unwrap_or_default())
}
