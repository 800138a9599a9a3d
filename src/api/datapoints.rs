//! Datapoint manager.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{timestamp, Datapoint, Dataset, DatastreamId, NewDatapoint, Order};
use crate::{Error, Result};

const DATASTREAMS: &str = "datastreams";
const DATAPOINTS: &str = "datapoints";

/// Manager for the datapoints of one datastream.
///
/// # Example
///
/// ```no_run
/// use chrono::{TimeZone, Utc};
/// use dotide_rs::api::{DatapointSelector, DatapointsQuery};
/// use dotide_rs::models::{NewDatapoint, Order};
/// use dotide_rs::DatastreamId;
///
/// # async fn example(client: dotide_rs::DotideClient) -> dotide_rs::Result<()> {
/// let datapoints = client.datapoints(&DatastreamId::new("id0"));
///
/// datapoints.create_one(None, 1).await?;
/// datapoints
///     .create(&[NewDatapoint::at(Utc::now(), 1), NewDatapoint::at(Utc::now(), 2)])
///     .await?;
///
/// let start = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
/// let dataset = datapoints
///     .filter(DatapointsQuery::new().start(start).end(Utc::now()).order(Order::Asc).limit(1000))
///     .await?;
///
/// datapoints.delete(DatapointSelector::range(Some(start), None)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DatapointManager {
    inner: Arc<ClientInner>,
    id: DatastreamId,
}

/// Query parameters for a datapoint range query.
///
/// Timestamps are sent in the millisecond ISO-8601 wire format.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DatapointsQuery {
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub end: Option<DateTime<Utc>>,
    /// Sort order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Exact timestamp
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub t: Option<DateTime<Utc>>,
    /// Maximum number of datapoints to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of datapoints to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Ask for summary statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<bool>,
    /// Aggregation interval, e.g. `1h`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Aggregation function applied per interval, e.g. `avg`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl DatapointsQuery {
    /// An unbounded query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the upper bound.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the sort order.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Match an exact timestamp.
    pub fn t(mut self, t: DateTime<Utc>) -> Self {
        self.t = Some(t);
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

    /// Request summary statistics.
    pub fn summary(mut self, summary: bool) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Aggregate over `interval` with `function`.
    pub fn aggregate(mut self, interval: impl Into<String>, function: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self.function = Some(function.into());
        self
    }
}

/// Which datapoints a delete removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatapointSelector {
    /// The single datapoint at this exact timestamp.
    At(DateTime<Utc>),
    /// Every datapoint between the bounds, inclusive. At least one bound is
    /// required.
    Range {
        /// Lower bound
        start: Option<DateTime<Utc>>,
        /// Upper bound
        end: Option<DateTime<Utc>>,
    },
}

impl DatapointSelector {
    /// Select an inclusive range.
    pub fn range(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        DatapointSelector::Range { start, end }
    }
}

#[derive(Serialize)]
struct RangeQuery {
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    end: Option<DateTime<Utc>>,
}

impl DatapointManager {
    pub(crate) fn new(inner: Arc<ClientInner>, id: DatastreamId) -> Self {
        Self { inner, id }
    }

    /// The datastream this manager is scoped to.
    pub fn datastream_id(&self) -> &DatastreamId {
        &self.id
    }

    /// Query datapoints. The dataset keeps the server's ordering.
    pub async fn filter(&self, query: DatapointsQuery) -> Result<Dataset> {
        self.inner
            .get_with_query(&[DATASTREAMS, self.id.as_str(), DATAPOINTS], &query)
            .await
    }

    /// Create many datapoints in one request.
    ///
    /// The returned datapoints are in the same order as `points`.
    pub async fn create(&self, points: &[NewDatapoint]) -> Result<Vec<Datapoint>> {
        self.inner
            .post(&[DATASTREAMS, self.id.as_str(), DATAPOINTS], points)
            .await
    }

    /// Create one datapoint. The server stamps it with the current time when
    /// `t` is `None`.
    pub async fn create_one(&self, t: Option<DateTime<Utc>>, v: impl Into<Value>) -> Result<Datapoint> {
        let point = NewDatapoint { t, v: v.into() };
        self.inner
            .post(&[DATASTREAMS, self.id.as_str(), DATAPOINTS], &point)
            .await
    }

    /// Get the datapoint at exactly `t`.
    ///
    /// A missing datapoint is an [`Error::Api`] for which
    /// [`Error::is_not_found`] holds.
    pub async fn get(&self, t: DateTime<Utc>) -> Result<Datapoint> {
        let t = timestamp::format(&t);
        self.inner
            .get(&[DATASTREAMS, self.id.as_str(), DATAPOINTS, t.as_str()])
            .await
    }

    /// Delete one datapoint or an inclusive range.
    ///
    /// Returns `true` when the server answered with an empty body. A range
    /// with neither bound is rejected before any request is made.
    pub async fn delete(&self, selector: DatapointSelector) -> Result<bool> {
        match selector {
            DatapointSelector::At(t) => {
                let t = timestamp::format(&t);
                self.inner
                    .delete(&[DATASTREAMS, self.id.as_str(), DATAPOINTS, t.as_str()])
                    .await
            }
            DatapointSelector::Range { start: None, end: None } => Err(Error::InvalidInput(
                "datapoint range delete needs a start or an end".to_string(),
            )),
            DatapointSelector::Range { start, end } => {
                self.inner
                    .delete_with_query(
                        &[DATASTREAMS, self.id.as_str(), DATAPOINTS],
                        &RangeQuery { start, end },
                    )
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DotideClient;
    use chrono::TimeZone;

    #[test]
    fn test_query_formats_timestamps() {
        let query = DatapointsQuery::new()
            .start(Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap())
            .end(Utc.with_ymd_and_hms(2014, 1, 2, 0, 0, 0).unwrap())
            .order(Order::Asc)
            .limit(1000)
            .summary(true)
            .aggregate("1h", "avg");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "start": "2014-01-01T00:00:00.000Z",
                "end": "2014-01-02T00:00:00.000Z",
                "order": "asc",
                "limit": 1000,
                "summary": true,
                "interval": "1h",
                "function": "avg"
            })
        );
    }

    #[tokio::test]
    async fn test_unbounded_range_delete_is_rejected() {
        let client = DotideClient::anonymous("db").unwrap();
        let datapoints = client.datapoints(&DatastreamId::new("id0"));

        let err = datapoints
            .delete(DatapointSelector::range(None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
