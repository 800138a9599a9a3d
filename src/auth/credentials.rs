//! Credential storage for Dotide API authentication.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Credentials attached to every request made by a client.
///
/// Secrets are held as [`SecretString`] and never appear in `Debug` output.
#[derive(Clone, Default)]
pub enum Credentials {
    /// HTTP basic auth with the database's client id and secret.
    Basic {
        /// Database client id
        client_id: String,
        /// Database client secret
        client_secret: SecretString,
    },
    /// Bearer auth with an access token.
    Bearer(SecretString),
    /// No `Authorization` header.
    #[default]
    Anonymous,
}

impl Credentials {
    /// Basic auth credentials.
    pub fn basic(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials::Basic {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Bearer token credentials.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Credentials::Bearer(SecretString::from(access_token.into()))
    }

    /// Pick the auth scheme from whichever values are present.
    ///
    /// Basic auth wins when both the client id and secret are given, then a
    /// bearer token, otherwise the client is anonymous.
    ///
    /// # Example
    ///
    /// ```
    /// use dotide_rs::Credentials;
    ///
    /// let creds = Credentials::resolve(None, Some("secret".into()), Some("token".into()));
    /// assert_eq!(creds.scheme(), "bearer");
    /// ```
    pub fn resolve(
        client_id: Option<String>,
        client_secret: Option<String>,
        access_token: Option<String>,
    ) -> Self {
        match (client_id, client_secret, access_token) {
            (Some(id), Some(secret), _) => Credentials::basic(id, secret),
            (_, _, Some(token)) => Credentials::bearer(token),
            _ => Credentials::Anonymous,
        }
    }

    /// Short name of the auth scheme, for logging.
    pub fn scheme(&self) -> &'static str {
        match self {
            Credentials::Basic { .. } => "basic",
            Credentials::Bearer(_) => "bearer",
            Credentials::Anonymous => "anonymous",
        }
    }

    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Basic {
                client_id,
                client_secret,
            } => request.basic_auth(client_id, Some(client_secret.expose_secret())),
            Credentials::Bearer(token) => request.bearer_auth(token.expose_secret()),
            Credentials::Anonymous => request,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { client_id, .. } => f
                .debug_struct("Basic")
                .field("client_id", client_id)
                .field("client_secret", &"[REDACTED]")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Credentials::Anonymous => f.write_str("Anonymous"),
        }
    }
}
