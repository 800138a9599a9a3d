//! Millisecond ISO-8601 timestamps as used on the wire.
//!
//! The API sends and expects `YYYY-MM-DDTHH:MM:SS.mmmZ`. Parsing is strict:
//! any other precision, an offset instead of `Z`, or a missing `Z` is an
//! error rather than a best-effort coercion.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// The wire format, as a `chrono` format string.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a timestamp for the API, truncating to milliseconds.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dotide_rs::models::timestamp;
///
/// let t = Utc.with_ymd_and_hms(2014, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(timestamp::format(&t), "2014-01-02T03:04:05.000Z");
/// ```
pub fn format(t: &DateTime<Utc>) -> String {
    t.trunc_subsecs(3).format(FORMAT).to_string()
}

/// Parse a timestamp received from the API.
pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
    let naive = NaiveDateTime::parse_from_str(s, FORMAT)
        .map_err(|e| format!("invalid timestamp {:?}: {}", s, e))?;
    let t = naive.and_utc();

    // chrono accepts any number of fraction digits for %.3f, so re-render to
    // reject anything that is not exactly the wire format.
    if format(&t) != s {
        return Err(format!(
            "invalid timestamp {:?}: expected millisecond precision with a Z suffix",
            s
        ));
    }
    Ok(t)
}

/// Serde adapter for `DateTime<Utc>` fields.
pub fn serialize<S: Serializer>(t: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(t))
}

/// Serde adapter for `DateTime<Utc>` fields.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(de::Error::custom)
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
pub mod option {
    use super::*;

    /// Serialize `Some` as a wire timestamp and `None` as null.
    pub fn serialize<S: Serializer>(
        t: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => serializer.serialize_str(&format(t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize a nullable wire timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse(&s).map_err(de::Error::custom))
            .transpose()
    }
}
