//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Resolve services from the registry and call them
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Run SQL directly
//! - Contain business logic
//! - Manage database connections

pub mod db;
pub mod session;
pub mod user;

use anyhow::Result;

use wharf_core::{RequestContext, SessionStore, UserRepository};

use crate::bootstrap::CliContext;

/// Build a request context authenticated as the given user id.
///
/// CLI commands name the acting user explicitly; there is no ambient
/// login. Fails when the user does not exist.
pub(crate) async fn context_for_user(ctx: &CliContext, user_id: i64) -> Result<RequestContext> {
    let users = ctx.registry.get::<dyn UserRepository>()?;
    let user = users.get_by_id(user_id).await?;
    let store = ctx.registry.get::<dyn SessionStore>()?;
    Ok(RequestContext::new(store).with_user(user))
}
