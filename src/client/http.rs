//! HTTP transport for the Dotide API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{AccessTokenManager, DatapointManager, DatastreamManager};
use crate::auth::Credentials;
use crate::models::DatastreamId;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Dotide API.
///
/// A client is bound to one database. It hands out manager structs for each
/// resource type; managers share the client's connection pool and
/// credentials, so creating them is cheap.
///
/// # Example
///
/// ```no_run
/// use dotide_rs::{DotideClient, DatastreamId};
///
/// # async fn example() -> dotide_rs::Result<()> {
/// let client = DotideClient::with_access_token("db", "your-access-token")?;
///
/// let datastream = client.datastreams().get(&DatastreamId::new("id0")).await?;
/// let latest = datastream.datapoints()?.filter(Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DotideClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) database: String,
    pub(crate) base_url: Url,
    pub(crate) config: ClientConfig,
}

impl DotideClient {
    /// Create a client for `database` with explicit credentials and
    /// configuration.
    pub fn new(
        database: impl Into<String>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let database = database.into();
        if database.is_empty() {
            return Err(Error::Config("database name must not be empty".to_string()));
        }

        let mut base_url = Url::parse(&config.base_url())?;
        base_url
            .path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be a base URL", config.base_url())))?
            .pop_if_empty()
            .push(&database);

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!(
            %base_url,
            auth = credentials.scheme(),
            "created dotide client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                database,
                base_url,
                config,
            }),
        })
    }

    /// Create a client authenticating with the database's client id and
    /// secret.
    pub fn with_client_credentials(
        database: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            database,
            Credentials::basic(client_id, client_secret),
            ClientConfig::default(),
        )
    }

    /// Create a client authenticating with an access token.
    pub fn with_access_token(
        database: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::new(
            database,
            Credentials::bearer(access_token),
            ClientConfig::default(),
        )
    }

    /// Create a client that sends no `Authorization` header.
    pub fn anonymous(database: impl Into<String>) -> Result<Self> {
        Self::new(database, Credentials::Anonymous, ClientConfig::default())
    }

    /// Get the access token manager.
    pub fn access_tokens(&self) -> AccessTokenManager {
        AccessTokenManager::new(self.inner.clone())
    }

    /// Get the datastream manager.
    pub fn datastreams(&self) -> DatastreamManager {
        DatastreamManager::new(self.inner.clone())
    }

    /// Get the datapoint manager for one datastream.
    pub fn datapoints(&self, id: &DatastreamId) -> DatapointManager {
        DatapointManager::new(self.inner.clone(), id.clone())
    }

    /// The database this client is bound to.
    pub fn database(&self) -> &str {
        &self.inner.database
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The credentials attached to each request.
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }
}

impl ClientInner {
    /// Build the URL for a path below the database, percent-encoding each
    /// segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be a base URL", self.base_url)))?
            .extend(segments);
        Ok(url)
    }

    /// Build the fixed request headers.
    pub(crate) fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(HeaderName::from_static("timezone"), HeaderValue::from_static("UTC"));
        headers
    }

    /// Issue one request and decode the response.
    ///
    /// Returns `None` when the server answered with an empty body.
    pub(crate) async fn request<Q, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Option<Value>>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        tracing::debug!(%method, %url, "sending request");

        let mut request = self
            .http
            .request(method, url)
            .headers(self.build_headers());
        request = self.credentials.apply(request);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let body = self
            .request::<(), ()>(Method::GET, segments, None, None)
            .await?;
        decode(body)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T> {
        let body = self
            .request::<Q, ()>(Method::GET, segments, Some(query), None)
            .await?;
        decode(body)
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let body = self
            .request::<(), B>(Method::POST, segments, None, Some(body))
            .await?;
        decode(body)
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let body = self
            .request::<(), B>(Method::PUT, segments, None, Some(body))
            .await?;
        decode(body)
    }

    /// Make a DELETE request. Succeeds only on an empty response body.
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<bool> {
        let body = self
            .request::<(), ()>(Method::DELETE, segments, None, None)
            .await?;
        expect_empty(body)
    }

    /// Make a DELETE request with query parameters.
    pub(crate) async fn delete_with_query<Q: Serialize>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<bool> {
        let body = self
            .request::<Q, ()>(Method::DELETE, segments, Some(query), None)
            .await?;
        expect_empty(body)
    }

    /// Handle an API response.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Option<Value>> {
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), len = bytes.len(), "received response");

        if status.as_u16() >= 400 {
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
                if bytes.is_empty() {
                    Value::Null
                } else {
                    Value::String(String::from_utf8_lossy(&bytes).into_owned())
                }
            });
            let err = Error::from_api_response(status.as_u16(), body);
            tracing::warn!(status = status.as_u16(), error = %err, "api request failed");
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T> {
    match body {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Err(Error::EmptyBody),
    }
}

fn expect_empty(body: Option<Value>) -> Result<bool> {
    match body {
        None => Ok(true),
        Some(value) => Err(Error::UnexpectedBody(value)),
    }
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish()
    }
}

impl std::fmt::Debug for DotideClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotideClient")
            .field("database", &self.inner.database)
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
