//! Auth service - accessor for the authenticated user.

use thiserror::Error;

use crate::context::RequestContext;
use crate::domain::User;

/// Errors from auth operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The current context carries no authenticated user.
    #[error("no authenticated user in the current context")]
    NotAuthenticated,
}

/// Accessor for the current user.
///
/// A pure read over the request context; real authentication middleware is
/// out of scope for this crate.
#[derive(Debug, Default)]
pub struct AuthService;

impl AuthService {
    /// Create the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The authenticated user of the given context.
    pub fn current_user(&self, ctx: &RequestContext) -> Result<User, AuthError> {
        ctx.current_user()
            .cloned()
            .ok_or(AuthError::NotAuthenticated)
    }
}
