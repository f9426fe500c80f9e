//! Database maintenance command handlers.

use anyhow::Result;

use wharf_db::{cleanup_tables, schema};

use crate::bootstrap::CliContext;

/// Execute the `db init` command.
///
/// Bootstrap already created the schema; this reports what exists so the
/// command is useful as a connectivity check.
pub fn init(ctx: &CliContext) -> Result<()> {
    println!("Schema ready at {}", ctx.config.database_url);
    for table in schema::sorted_tables() {
        println!("  {}", table.name);
    }
    Ok(())
}

/// Execute the `db clean` command.
///
/// Empties every table, children before parents. Table failures are
/// logged and skipped, so a partially broken schema still gets cleaned as
/// far as possible.
pub async fn clean(ctx: &CliContext) -> Result<()> {
    cleanup_tables(ctx.db().pool()).await;
    println!("Emptied {} table(s)", schema::sorted_tables().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap;
    use wharf_core::{NewUser, UserRepository};

    #[tokio::test]
    async fn clean_removes_existing_rows() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();
        let users = ctx.registry.get::<dyn UserRepository>().unwrap();
        users
            .create(&NewUser {
                name: "fake".to_string(),
            })
            .await
            .unwrap();

        clean(&ctx).await.unwrap();

        let err = users.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, wharf_core::RepositoryError::NotFound(_)));
        ctx.release().await;
    }

    #[tokio::test]
    async fn init_reports_schema() {
        let ctx = bootstrap(Some("sqlite::memory:".to_string())).await.unwrap();
        init(&ctx).unwrap();
        ctx.release().await;
    }
}
