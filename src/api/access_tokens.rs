//! Access token manager.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{AccessToken, Scope};
use crate::Result;

const ACCESS_TOKENS: &str = "access_tokens";

/// Manager for access token operations.
///
/// # Example
///
/// ```no_run
/// use dotide_rs::models::{Permission, Scope};
///
/// # async fn example(client: dotide_rs::DotideClient) -> dotide_rs::Result<()> {
/// let scopes = [Scope::new(Permission::ALL).with_ids(["id0"])];
/// let mut token = client.access_tokens().create(Some(&scopes[..])).await?;
///
/// token.scopes = vec![Scope::global([Permission::Read])];
/// token.save().await?;
///
/// assert!(token.delete().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AccessTokenManager {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing access tokens.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AccessTokensQuery {
    /// Maximum number of tokens to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of tokens to skip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Serialize)]
struct ScopesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<&'a [Scope]>,
}

impl AccessTokenManager {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all access tokens of the database.
    pub async fn filter(&self) -> Result<Vec<AccessToken>> {
        self.filter_with(AccessTokensQuery::default()).await
    }

    /// List access tokens with paging.
    pub async fn filter_with(&self, query: AccessTokensQuery) -> Result<Vec<AccessToken>> {
        let tokens: Vec<AccessToken> = self
            .inner
            .get_with_query(&[ACCESS_TOKENS], &query)
            .await?;
        Ok(tokens.into_iter().map(|t| t.bind(self)).collect())
    }

    /// Create an access token. `scopes` is omitted from the request when
    /// `None`.
    pub async fn create(&self, scopes: Option<&[Scope]>) -> Result<AccessToken> {
        let token: AccessToken = self
            .inner
            .post(&[ACCESS_TOKENS], &ScopesRequest { scopes })
            .await?;
        Ok(token.bind(self))
    }

    /// Get an access token.
    pub async fn get(&self, token: &str) -> Result<AccessToken> {
        let token: AccessToken = self.inner.get(&[ACCESS_TOKENS, token]).await?;
        Ok(token.bind(self))
    }

    /// Replace the scopes of an access token.
    pub async fn update(&self, token: &str, scopes: Option<&[Scope]>) -> Result<AccessToken> {
        let token: AccessToken = self
            .inner
            .put(&[ACCESS_TOKENS, token], &ScopesRequest { scopes })
            .await?;
        Ok(token.bind(self))
    }

    /// Delete an access token.
    ///
    /// Returns `true` when the server answered with an empty body; any other
    /// body is reported as [`Error::UnexpectedBody`](crate::Error::UnexpectedBody).
    pub async fn delete(&self, token: &str) -> Result<bool> {
        self.inner.delete(&[ACCESS_TOKENS, token]).await
    }
}
