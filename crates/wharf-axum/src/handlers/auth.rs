//! Auth handlers - the current-user accessor.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use wharf_core::{AuthService, User};

use crate::error::HttpError;
use crate::handlers::request_context;
use crate::state::AppState;

/// Get the current user.
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<User>, HttpError> {
    let ctx = request_context(&state, &headers).await?;
    let auth = state.registry.get::<AuthService>()?;
    Ok(Json(auth.current_user(&ctx)?))
}
