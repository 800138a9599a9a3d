//! Client configuration options.

use std::time::Duration;

/// Default API host.
pub const DEFAULT_HOST: &str = "api.dotide.com";

/// Default API version path segment.
pub const DEFAULT_VERSION: &str = "v1";

/// Configuration for the Dotide client.
///
/// These values are fixed for the lifetime of a client.
///
/// # Example
///
/// ```
/// use dotide_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_host("localhost:3000")
///     .with_secure(false)
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.base_url(), "http://localhost:3000/v1");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, optionally with a port
    pub host: String,
    /// API version path segment
    pub version: String,
    /// Use https when `true`, http otherwise
    pub secure: bool,
    /// Total request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
            secure: true,
            timeout: None,
            user_agent: format!("dotide-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the API version segment.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Choose between https (`true`) and http (`false`).
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Bound each request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The URL scheme implied by `secure`.
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `{scheme}://{host}/{version}`, without the database segment.
    pub fn base_url(&self) -> String {
        format!("{}://{}/{}", self.scheme(), self.host, self.version)
    }
}
