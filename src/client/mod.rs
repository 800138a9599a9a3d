//! HTTP client and transport layer for the Dotide API.
//!
//! This module provides the main entry point [`DotideClient`]. Every request
//! goes to `{scheme}://{host}/{version}/{database}{path}`.
//!
//! # Example
//!
//! ```no_run
//! use dotide_rs::DotideClient;
//!
//! # async fn example() -> dotide_rs::Result<()> {
//! let client = DotideClient::with_client_credentials("db", "client-id", "client-secret")?;
//!
//! let datastreams = client.datastreams().filter(Default::default()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_VERSION};
pub use http::DotideClient;
pub(crate) use http::ClientInner;
