//! Session command handlers.

use anyhow::Result;

use wharf_core::{SessionService, SessionStore};

use crate::bootstrap::CliContext;
use crate::handlers::context_for_user;

/// Execute the `session get` command.
pub async fn get(ctx: &CliContext, user_id: i64, key: &str) -> Result<()> {
    let sessions = ctx.registry.get::<SessionService>()?;
    let request = context_for_user(ctx, user_id).await?;

    match sessions.get(&request, key).await? {
        Some(value) => println!("{value}"),
        None => println!("(not set)"),
    }
    Ok(())
}

/// Execute the `session set` command.
pub async fn set(ctx: &CliContext, user_id: i64, key: &str, value: &str) -> Result<()> {
    let sessions = ctx.registry.get::<SessionService>()?;
    let request = context_for_user(ctx, user_id).await?;

    sessions.set(&request, key, value).await?;
    println!("Stored '{key}' for user {user_id}");
    Ok(())
}

/// Execute the `session list` command.
pub async fn list(ctx: &CliContext, user_id: i64) -> Result<()> {
    // Listing is a store-level view, not part of the per-key service API.
    let store = ctx.registry.get::<dyn SessionStore>()?;
    let entries = store.list(user_id).await?;

    if entries.is_empty() {
        println!("No session values for user {user_id}");
        return Ok(());
    }

    println!("{:<20} {:<20} Updated", "Key", "Value");
    for entry in entries {
        println!("{:<20} {:<20} {}", entry.key, entry.value, entry.updated_at);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use crate::handlers::user;

    #[tokio::test]
    async fn set_get_list_round_trips() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();
        user::add(&ctx, "alice").await.unwrap();

        set(&ctx, 1, "foo", "bar").await.unwrap();
        get(&ctx, 1, "foo").await.unwrap();
        list(&ctx, 1).await.unwrap();

        ctx.release().await;
    }

    #[tokio::test]
    async fn commands_fail_for_unknown_user() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();

        assert!(set(&ctx, 42, "foo", "bar").await.is_err());
        assert!(get(&ctx, 42, "foo").await.is_err());

        ctx.release().await;
    }
}
