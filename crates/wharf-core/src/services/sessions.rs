//! Session service - a key-value store scoped to the current user.

use thiserror::Error;

use crate::context::RequestContext;
use crate::domain::User;
use crate::ports::RepositoryError;
use crate::services::auth::AuthError;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation requires an authenticated user.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No value stored under the requested key.
    #[error("no session value stored for key '{0}'")]
    MissingKey(String),

    /// The underlying store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Per-user session key-value store.
///
/// Values are persisted through the context's [`SessionStore`], keyed by
/// the authenticated user's identity.
///
/// [`SessionStore`]: crate::ports::SessionStore
#[derive(Debug, Default)]
pub struct SessionService;

impl SessionService {
    /// Create the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fetch the value stored under `key`, or `None` when absent.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        key: &str,
    ) -> Result<Option<String>, SessionError> {
        let user = self.authenticated(ctx)?;
        Ok(ctx.store().get(user.id, key).await?)
    }

    /// Fetch the value stored under `key`, failing when absent.
    pub async fn require(&self, ctx: &RequestContext, key: &str) -> Result<String, SessionError> {
        self.get(ctx, key)
            .await?
            .ok_or_else(|| SessionError::MissingKey(key.to_string()))
    }

    /// Store `value` under `key` for the current user.
    pub async fn set(
        &self,
        ctx: &RequestContext,
        key: &str,
        value: &str,
    ) -> Result<(), SessionError> {
        let user = self.authenticated(ctx)?;
        ctx.store().set(user.id, key, value).await?;
        Ok(())
    }

    /// Remove the value stored under `key` for the current user.
    pub async fn remove(&self, ctx: &RequestContext, key: &str) -> Result<(), SessionError> {
        let user = self.authenticated(ctx)?;
        ctx.store().delete(user.id, key).await?;
        Ok(())
    }

    fn authenticated<'a>(&self, ctx: &'a RequestContext) -> Result<&'a User, AuthError> {
        ctx.current_user().ok_or(AuthError::NotAuthenticated)
    }
}
