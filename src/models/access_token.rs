//! Access token models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Permission;
use super::primitives::null_as_default;
use super::timestamp;
use crate::api::AccessTokenManager;
use crate::{Error, Result};

/// A permission grant attached to an access token.
///
/// A scope either applies to the whole database (`global`) or to the
/// datastreams matching `ids` or `tags`.
///
/// # Example
///
/// ```
/// use dotide_rs::models::{Permission, Scope};
///
/// let scope = Scope::new(Permission::ALL).with_ids(["id0"]).with_tags(["tag0"]);
/// assert!(!scope.global);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Granted operations
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<Permission>,
    /// Whether the scope covers every datastream
    #[serde(default, deserialize_with = "null_as_default")]
    pub global: bool,
    /// Datastream ids covered by the scope
    #[serde(default, deserialize_with = "null_as_default")]
    pub ids: Vec<String>,
    /// Datastream tags covered by the scope
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Scope {
    /// A scope granting `permissions` on nothing yet.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            ..Default::default()
        }
    }

    /// A scope granting `permissions` on every datastream.
    pub fn global(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            global: true,
            ..Self::new(permissions)
        }
    }

    /// Restrict to these datastream ids.
    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to datastreams carrying these tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// An access token and its scopes.
///
/// Tokens returned by an [`AccessTokenManager`] stay bound to it, so local
/// changes to `scopes` can be pushed back with [`save`](Self::save).
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// The token string
    #[serde(rename = "access_token")]
    pub token: String,
    /// Permission grants
    #[serde(default, deserialize_with = "null_as_default")]
    pub scopes: Vec<Scope>,
    /// When the token was created
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// When the token was last updated
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    manager: Option<AccessTokenManager>,
}

impl AccessToken {
    pub(crate) fn bind(mut self, manager: &AccessTokenManager) -> Self {
        self.manager = Some(manager.clone());
        self
    }

    /// Push the current `scopes` to the server.
    ///
    /// Only `updated_at` is refreshed from the response.
    pub async fn save(&mut self) -> Result<()> {
        let manager = self.manager.as_ref().ok_or(Error::Detached)?;
        let updated = manager.update(&self.token, Some(self.scopes.as_slice())).await?;
        self.updated_at = updated.updated_at;
        Ok(())
    }

    /// Delete the token on the server, consuming the local copy.
    pub async fn delete(self) -> Result<bool> {
        let manager = self.manager.as_ref().ok_or(Error::Detached)?;
        manager.delete(&self.token).await
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &self.token)
            .field("scopes", &self.scopes)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
