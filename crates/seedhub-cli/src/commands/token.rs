//! Access token commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use seedhub_auth::jwt::TokenEncoder;
use seedhub_core::config::AppConfig;
use seedhub_core::error::AppError;
use seedhub_service::UserService;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an access token for an existing account
    Issue {
        /// Login name
        login: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    token: String,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue { login } => {
            let stores = super::open_stores(config).await?;
            let user = UserService::new(stores.users.clone())
                .find_by_login(login)
                .await?;
            let (token, expires_at) = TokenEncoder::new(&config.auth).issue(&user)?;

            match format {
                OutputFormat::Json => output::print_item(
                    &IssuedToken {
                        token,
                        expires_at: expires_at.to_rfc3339(),
                    },
                    format,
                ),
                OutputFormat::Table => {
                    output::print_kv("Token", &token);
                    output::print_kv("Expires", &expires_at.to_rfc3339());
                }
            }
        }
    }

    Ok(())
}
