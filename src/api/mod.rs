//! Resource managers for Dotide endpoints.
//!
//! Each manager turns typed method calls into one HTTP request against its
//! resource and maps the JSON response onto [`models`](crate::models).

mod access_tokens;
mod datapoints;
mod datastreams;

pub use access_tokens::{AccessTokenManager, AccessTokensQuery};
pub use datapoints::{DatapointManager, DatapointSelector, DatapointsQuery};
pub use datastreams::{DatastreamManager, DatastreamUpdate, DatastreamsQuery, NewDatastream};
