//! Datapoint and dataset models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::{null_as_default, DatastreamId};
use super::timestamp;

/// A single (timestamp, value) sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datapoint {
    /// Sample time
    #[serde(with = "timestamp")]
    pub t: DateTime<Utc>,
    /// Sample value
    pub v: Value,
}

/// A datapoint to create. The server assigns the current time when `t` is
/// absent.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use dotide_rs::models::NewDatapoint;
///
/// let now = NewDatapoint::new(1);
/// let at = NewDatapoint::at(Utc::now(), 2.5);
/// assert!(now.t.is_none() && at.t.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDatapoint {
    /// Sample time
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub t: Option<DateTime<Utc>>,
    /// Sample value
    pub v: Value,
}

impl NewDatapoint {
    /// A sample stamped by the server.
    pub fn new(v: impl Into<Value>) -> Self {
        Self { t: None, v: v.into() }
    }

    /// A sample at `t`.
    pub fn at(t: DateTime<Utc>, v: impl Into<Value>) -> Self {
        Self {
            t: Some(t),
            v: v.into(),
        }
    }
}

/// The result of a datapoint range query.
///
/// Datapoints are kept in the order the server returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The queried datastream
    pub id: DatastreamId,
    /// Samples, in response order
    #[serde(default, deserialize_with = "null_as_default")]
    pub datapoints: Vec<Datapoint>,
    /// Query options echoed by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Map<String, Value>,
    /// Summary statistics, when requested
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: Map<String, Value>,
}

impl Dataset {
    /// Number of datapoints.
    pub fn len(&self) -> usize {
        self.datapoints.len()
    }

    /// Returns `true` if the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.datapoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dataset_keeps_response_order() {
        let json = r#"{
            "id": "ds0",
            "datapoints": [
                {"t": "2014-01-02T00:00:00.000Z", "v": 2},
                {"t": "2014-01-01T00:00:00.000Z", "v": 1}
            ],
            "summary": {"count": 2}
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.datapoints[0].v, 2);
        assert_eq!(dataset.datapoints[1].v, 1);
        assert_eq!(dataset.summary["count"], 2);
        assert!(dataset.options.is_empty());
    }

    #[test]
    fn test_new_datapoint_omits_missing_t() {
        let json = serde_json::to_value(NewDatapoint::new(1)).unwrap();
        assert_eq!(json, serde_json::json!({"v": 1}));

        let t = Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap();
        let json = serde_json::to_value(NewDatapoint::at(t, 1)).unwrap();
        assert_eq!(json, serde_json::json!({"t": "2014-01-01T00:00:00.000Z", "v": 1}));
    }
}
