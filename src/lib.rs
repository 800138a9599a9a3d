//! # dotide-rs
//!
//! An async Rust client for the Dotide time-series data API.
//!
//! The client is bound to one database and exposes three resource managers:
//!
//! - **Access tokens**: credentials scoped to permissions, datastream ids and tags
//! - **Datastreams**: named, typed time series
//! - **Datapoints**: the `(t, v)` samples of one datastream
//!
//! Each manager call is a single HTTP request. Responses are decoded into
//! typed models; HTTP error statuses surface as [`Error::Api`] carrying the
//! server's message.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use dotide_rs::{DotideClient, DatastreamId};
//! use dotide_rs::api::{DatapointsQuery, NewDatastream};
//!
//! #[tokio::main]
//! async fn main() -> dotide_rs::Result<()> {
//!     let client = DotideClient::with_client_credentials("db", "client-id", "client-secret")?;
//!
//!     let datastream = client
//!         .datastreams()
//!         .create(&NewDatastream::new().id("id0").name("name0").kind("number"))
//!         .await?;
//!
//!     let datapoints = datastream.datapoints()?;
//!     datapoints.create_one(Some(Utc::now()), 1).await?;
//!
//!     let dataset = datapoints.filter(DatapointsQuery::new().limit(10)).await?;
//!     println!("{} datapoints in {}", dataset.len(), datastream.id());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ClientConfig, DotideClient};
pub use error::{Error, Result};
pub use models::DatastreamId;

/// Prelude module for convenient imports.
///
/// ```rust
/// use dotide_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccessTokenManager, AccessTokensQuery, DatapointManager, DatapointSelector,
        DatapointsQuery, DatastreamManager, DatastreamUpdate, DatastreamsQuery, NewDatastream,
    };
    pub use crate::auth::Credentials;
    pub use crate::client::{ClientConfig, DotideClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccessToken, Datapoint, Dataset, Datastream, DatastreamId, NewDatapoint, Order,
        Permission, Scope,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datastream_id_creation() {
        let id = DatastreamId::new("id0");
        assert_eq!(id.as_str(), "id0");
    }

    #[test]
    fn test_default_endpoint() {
        let client = DotideClient::anonymous("db").unwrap();
        assert_eq!(client.config().base_url(), "https://api.dotide.com/v1");
        assert_eq!(client.database(), "db");
    }
}
