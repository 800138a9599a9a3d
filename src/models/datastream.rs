//! Datastream models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::{null_as_default, DatastreamId};
use super::timestamp;
use crate::api::{DatapointManager, DatastreamManager, DatastreamUpdate};
use crate::{Error, Result};

/// A named, typed time series.
///
/// Datastreams returned by a [`DatastreamManager`] stay bound to it: local
/// edits to `name`, `tags` and `properties` can be pushed back with
/// [`save`](Self::save), and [`datapoints`](Self::datapoints) gives access to
/// the stream's samples.
#[derive(Clone, Serialize, Deserialize)]
pub struct Datastream {
    id: DatastreamId,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Value type, e.g. `number`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Tags, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Free-form properties
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
    /// Timestamp of the latest datapoint
    #[serde(default, with = "timestamp::option")]
    pub current_t: Option<DateTime<Utc>>,
    /// Value of the latest datapoint
    #[serde(default)]
    pub current_v: Option<Value>,
    /// When the datastream was created
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When the datastream was last updated
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    manager: Option<DatastreamManager>,
}

impl Datastream {
    pub(crate) fn bind(mut self, manager: &DatastreamManager) -> Self {
        self.manager = Some(manager.clone());
        self
    }

    /// The datastream id.
    pub fn id(&self) -> &DatastreamId {
        &self.id
    }

    /// Datapoint manager scoped to this datastream.
    pub fn datapoints(&self) -> Result<DatapointManager> {
        let manager = self.manager.as_ref().ok_or(Error::Detached)?;
        Ok(manager.datapoints(&self.id))
    }

    /// Push `name`, `tags` and `properties` to the server.
    ///
    /// Only `updated_at` is refreshed from the response.
    pub async fn save(&mut self) -> Result<()> {
        let manager = self.manager.as_ref().ok_or(Error::Detached)?;
        let changes = DatastreamUpdate {
            name: self.name.clone(),
            tags: Some(self.tags.clone()),
            properties: Some(self.properties.clone()),
        };
        let updated = manager.update(&self.id, &changes).await?;
        self.updated_at = updated.updated_at;
        Ok(())
    }

    /// Delete the datastream on the server, consuming the local copy.
    pub async fn delete(self) -> Result<bool> {
        let manager = self.manager.as_ref().ok_or(Error::Detached)?;
        manager.delete(&self.id).await
    }
}

impl std::fmt::Debug for Datastream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Datastream")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("tags", &self.tags)
            .field("properties", &self.properties)
            .field("current_t", &self.current_t)
            .field("current_v", &self.current_v)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
