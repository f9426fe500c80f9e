//! Session handlers - the per-user key-value store.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};

use wharf_core::SessionService;

use crate::error::HttpError;
use crate::handlers::request_context;
use crate::state::AppState;

/// One session value on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionValue {
    /// Entry key.
    pub key: String,
    /// Stored value.
    pub value: String,
}

/// Request body for storing a session value.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSessionRequest {
    /// Value to store.
    pub value: String,
}

/// Get the value stored under a key; 404 when absent.
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SessionValue>, HttpError> {
    let ctx = request_context(&state, &headers).await?;
    let sessions = state.registry.get::<SessionService>()?;

    let value = sessions.require(&ctx, &key).await?;
    Ok(Json(SessionValue { key, value }))
}

/// Store a value under a key for the current user.
pub async fn set(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    Json(req): Json<SetSessionRequest>,
) -> Result<StatusCode, HttpError> {
    let ctx = request_context(&state, &headers).await?;
    let sessions = state.registry.get::<SessionService>()?;

    sessions.set(&ctx, &key, &req.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove the value stored under a key.
pub async fn remove(
    State(state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let ctx = request_context(&state, &headers).await?;
    let sessions = state.registry.get::<SessionService>()?;

    sessions.remove(&ctx, &key).await?;
    Ok(StatusCode::NO_CONTENT)
}
