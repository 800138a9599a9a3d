//! Authentication for the Dotide API.
//!
//! A database is accessed either with its client id and secret (HTTP basic
//! auth) or with an access token (bearer auth). Clients may also be created
//! without credentials for public databases.
//!
//! ```
//! use dotide_rs::Credentials;
//!
//! let basic = Credentials::basic("client-id", "client-secret");
//! let bearer = Credentials::bearer("61e13e47ed0b1b6f");
//! assert_eq!(basic.scheme(), "basic");
//! assert_eq!(bearer.scheme(), "bearer");
//! ```

mod credentials;

pub use credentials::Credentials;
