//! Data models for the Dotide API.
//!
//! - [`primitives`] - Newtypes such as [`DatastreamId`]
//! - [`enums`] - Permissions and sort orders
//! - [`timestamp`] - The millisecond ISO-8601 wire format
//! - [`access_token`] - Access tokens and their scopes
//! - [`datastream`] - Datastreams
//! - [`datapoint`] - Datapoints and range query results

pub mod primitives;
pub mod enums;
pub mod timestamp;
pub mod access_token;
pub mod datastream;
pub mod datapoint;

pub use primitives::*;
pub use enums::*;
pub use access_token::*;
pub use datastream::*;
pub use datapoint::*;
