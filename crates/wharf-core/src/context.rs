//! Request/test context.
//!
//! The context replaces ambient "current session" and "current user"
//! lookups with an explicit object threaded through calls. Handlers build
//! one per request; tests build one per test body.

use std::sync::Arc;

use crate::domain::User;
use crate::ports::SessionStore;

/// The current logical context: one per request or test.
///
/// Carries the session store bound by the active database lifecycle and
/// the authenticated user, if any.
#[derive(Clone)]
pub struct RequestContext {
    store: Arc<dyn SessionStore>,
    user: Option<User>,
}

impl RequestContext {
    /// Create an unauthenticated context over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store, user: None }
    }

    /// Attach the authenticated user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// The session store for the current unit of work.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The authenticated user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
