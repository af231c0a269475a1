//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use seedhub_core::config::AppConfig;
use seedhub_core::error::AppError;
use seedhub_database::connection::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            seedhub_database::migration::run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
