//! CLI command definitions and dispatch.

pub mod locks;
pub mod migrate;
pub mod token;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use seedhub_core::config::AppConfig;
use seedhub_core::error::AppError;
use seedhub_database::Stores;

/// SeedHub administration
#[derive(Debug, Parser)]
#[command(name = "seedhub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (`config/{env}.toml`)
    #[arg(short, long, default_value = "production")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User accounts
    User(user::UserArgs),
    /// File lock maintenance
    Locks(locks::LocksArgs),
    /// Access tokens
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Locks(args) => locks::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format).await,
        }
    }
}

/// Open the configured stores without touching the schema.
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::open(&config.database, false).await
}
