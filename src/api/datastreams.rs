//! Datastream manager.

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::DatapointManager;
use crate::client::ClientInner;
use crate::models::{Datastream, DatastreamId};
use crate::Result;

const DATASTREAMS: &str = "datastreams";

/// Manager for datastream operations.
///
/// # Example
///
/// ```no_run
/// use dotide_rs::api::{DatastreamsQuery, NewDatastream};
///
/// # async fn example(client: dotide_rs::DotideClient) -> dotide_rs::Result<()> {
/// let mut datastream = client
///     .datastreams()
///     .create(&NewDatastream::new().id("id0").name("name0").kind("number").tags(["tag0"]))
///     .await?;
///
/// datastream.tags.push("tag1".to_string());
/// datastream.save().await?;
///
/// let tagged = client
///     .datastreams()
///     .filter(DatastreamsQuery::new().tags(["tag0", "tag1"]).limit(10))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DatastreamManager {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing datastreams.
///
/// List filters are sent as one comma-joined value each.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DatastreamsQuery {
    /// Only these ids
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_joined")]
    pub ids: Option<Vec<String>>,
    /// Only datastreams carrying these tags
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_joined")]
    pub tags: Option<Vec<String>>,
    /// Maximum number of datastreams to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of datastreams to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl DatastreamsQuery {
    /// An unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by ids.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Filter by tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

fn comma_joined<S: Serializer>(
    values: &Option<Vec<String>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}

/// Fields of a datastream to create. Absent fields are not sent.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NewDatastream {
    /// Caller-assigned id; the server assigns one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DatastreamId>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Value type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl NewDatastream {
    /// An empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn id(mut self, id: impl Into<DatastreamId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the value type.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Set the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Add one property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Fields of a datastream to change. Absent fields are left as they are.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DatastreamUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New tag list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl DatastreamManager {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List datastreams.
    pub async fn filter(&self, query: DatastreamsQuery) -> Result<Vec<Datastream>> {
        let datastreams: Vec<Datastream> =
            self.inner.get_with_query(&[DATASTREAMS], &query).await?;
        Ok(datastreams.into_iter().map(|ds| ds.bind(self)).collect())
    }

    /// Create a datastream.
    pub async fn create(&self, new: &NewDatastream) -> Result<Datastream> {
        let datastream: Datastream = self.inner.post(&[DATASTREAMS], new).await?;
        Ok(datastream.bind(self))
    }

    /// Get a datastream.
    pub async fn get(&self, id: &DatastreamId) -> Result<Datastream> {
        let datastream: Datastream = self.inner.get(&[DATASTREAMS, id.as_str()]).await?;
        Ok(datastream.bind(self))
    }

    /// Update a datastream.
    pub async fn update(&self, id: &DatastreamId, changes: &DatastreamUpdate) -> Result<Datastream> {
        let datastream: Datastream = self
            .inner
            .put(&[DATASTREAMS, id.as_str()], changes)
            .await?;
        Ok(datastream.bind(self))
    }

    /// Delete a datastream and all of its datapoints.
    ///
    /// Returns `true` when the server answered with an empty body.
    pub async fn delete(&self, id: &DatastreamId) -> Result<bool> {
        self.inner.delete(&[DATASTREAMS, id.as_str()]).await
    }

    /// Datapoint manager for the datastream `id`.
    pub fn datapoints(&self, id: &DatastreamId) -> DatapointManager {
        DatapointManager::new(self.inner.clone(), id.clone())
    }
}
