//! HTTP request handlers.
//!
//! Handlers are thin wrappers: they build a `RequestContext` from the
//! request, resolve services from the registry, and delegate.

pub mod auth;
pub mod session;

use axum::http::HeaderMap;

use wharf_core::{RepositoryError, RequestContext, SessionStore, UserRepository};

use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying the current user's id (test shim for auth middleware).
pub const USER_ID_HEADER: &str = "x-user-id";

/// Build the per-request context: current session store plus the
/// authenticated user, if the request names one.
pub(crate) async fn request_context(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<RequestContext, HttpError> {
    let store = state.registry.get::<dyn SessionStore>()?;
    let ctx = RequestContext::new(store);

    let Some(raw) = headers.get(USER_ID_HEADER) else {
        return Ok(ctx);
    };

    let user_id: i64 = raw
        .to_str()
        .ok()
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| HttpError::BadRequest(format!("invalid {USER_ID_HEADER} header")))?;

    let users = state.registry.get::<dyn UserRepository>()?;
    let user = users.get_by_id(user_id).await.map_err(|err| match err {
        RepositoryError::NotFound(_) => HttpError::Unauthorized(format!("unknown user {user_id}")),
        other => other.into(),
    })?;

    Ok(ctx.with_user(user))
}
