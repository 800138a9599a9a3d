//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A strongly-typed datastream id.
///
/// The id is the REST path segment of a datastream and never changes after
/// creation.
///
/// # Example
///
/// ```
/// use dotide_rs::DatastreamId;
///
/// let id = DatastreamId::new("51e51544fa36a48592000074");
/// println!("Datastream: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatastreamId(String);

impl DatastreamId {
    /// Create a new datastream id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatastreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DatastreamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DatastreamId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DatastreamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for DatastreamId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
