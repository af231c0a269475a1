//! User account commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use seedhub_core::config::AppConfig;
use seedhub_core::error::AppError;
use seedhub_entity::user::{CreateUser, User, UserRole};
use seedhub_service::UserService;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account
    Create {
        /// Login name
        #[arg(short, long)]
        login: String,
        /// Mail address
        #[arg(short, long)]
        mail: String,
        /// Credential (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Avatar URL
        #[arg(short, long, default_value = "")]
        avatar: String,
        /// Access tier
        #[arg(short, long, default_value_t = UserRole::MEMBER.0)]
        role: i32,
    },
    /// Show an account
    Show {
        /// Login name
        login: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Login
    login: String,
    /// Mail
    mail: String,
    /// Role
    role: i32,
    /// Created at
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login.clone(),
            mail: user.mail.clone(),
            role: user.role.0,
            created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let users = UserService::new(stores.users.clone());

    match &args.command {
        UserCommand::Create {
            login,
            mail,
            password,
            avatar,
            role,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = users
                .create_user(CreateUser {
                    login: login.clone(),
                    password,
                    mail: mail.clone(),
                    avatar: avatar.clone(),
                    role: UserRole(*role),
                })
                .await?;

            output::print_success(&format!("User '{}' created", user.login));
            output::print_list(&[UserRow::from(&user)], format);
        }
        UserCommand::Show { login } => {
            let user = users.find_by_login(login).await?;
            output::print_list(&[UserRow::from(&user)], format);
        }
    }

    Ok(())
}
