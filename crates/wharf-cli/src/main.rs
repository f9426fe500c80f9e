//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers which resolve services
//! through the registry - no direct database or pool access outside of
//! bootstrap.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wharf_cli::{Cli, Commands, DbCommand, SessionCommand, UserCommand, bootstrap, handlers};
use wharf_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; --verbose wins unless RUST_LOG is set explicitly
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // The server owns its own composition; everything else runs through a
    // short-lived CliContext.
    if let Commands::Serve { port } = cli.command {
        let mut config = AppConfig::from_env();
        if let Some(url) = cli.database_url {
            config = config.with_database_url(url);
        }
        return wharf_axum::start_server(config, port).await;
    }

    let ctx = bootstrap(cli.database_url).await?;

    let outcome = match cli.command {
        Commands::Db { command } => match command {
            DbCommand::Init => handlers::db::init(&ctx),
            DbCommand::Clean => handlers::db::clean(&ctx).await,
        },
        Commands::User { command } => match command {
            UserCommand::Add { name } => handlers::user::add(&ctx, &name).await,
            UserCommand::Show { user_id } => handlers::user::show(&ctx, user_id).await,
        },
        Commands::Session { command } => match command {
            SessionCommand::Get { user_id, key } => handlers::session::get(&ctx, user_id, &key).await,
            SessionCommand::Set {
                user_id,
                key,
                value,
            } => handlers::session::set(&ctx, user_id, &key, &value).await,
            SessionCommand::List { user_id } => handlers::session::list(&ctx, user_id).await,
        },
        Commands::Serve { .. } => unreachable!("handled above"),
    };

    // Connections are returned even when the command failed.
    ctx.release().await;
    outcome
}
