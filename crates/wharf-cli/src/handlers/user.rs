//! User command handlers.

use anyhow::Result;

use wharf_core::{NewUser, UserRepository};

use crate::bootstrap::CliContext;

/// Execute the `user add` command.
pub async fn add(ctx: &CliContext, name: &str) -> Result<()> {
    let users = ctx.registry.get::<dyn UserRepository>()?;
    let user = users
        .create(&NewUser {
            name: name.to_string(),
        })
        .await?;

    println!("Created user {} ({})", user.id, user.name);
    Ok(())
}

/// Execute the `user show` command.
pub async fn show(ctx: &CliContext, user_id: i64) -> Result<()> {
    let users = ctx.registry.get::<dyn UserRepository>()?;
    let user = users.get_by_id(user_id).await?;

    println!("{:<6} {}", "ID", user.id);
    println!("{:<6} {}", "Name", user.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;

    #[tokio::test]
    async fn add_then_show_round_trips() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();

        add(&ctx, "alice").await.unwrap();
        show(&ctx, 1).await.unwrap();

        ctx.release().await;
    }

    #[tokio::test]
    async fn show_unknown_user_fails() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();

        assert!(show(&ctx, 999).await.is_err());

        ctx.release().await;
    }
}
