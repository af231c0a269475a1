//! Lock maintenance commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use seedhub_core::config::AppConfig;
use seedhub_core::error::AppError;
use seedhub_service::LockService;

/// Arguments for lock commands
#[derive(Debug, Args)]
pub struct LocksArgs {
    /// Lock subcommand
    #[command(subcommand)]
    pub command: LocksCommand,
}

/// Lock subcommands
#[derive(Debug, Subcommand)]
pub enum LocksCommand {
    /// Clear every lock on files holding one older than the retention window
    Purge {
        /// Retention window in days (defaults to `locks.retention_days`)
        #[arg(short, long)]
        days: Option<u32>,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute lock commands
pub async fn execute(
    args: &LocksArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        LocksCommand::Purge { days, force } => {
            let days = days.unwrap_or(config.locks.retention_days);

            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Clear all locks on files holding one older than {days} days?"
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let stores = super::open_stores(config).await?;
            let report = LockService::new(stores.files.clone())
                .purge_stale_locks(days)
                .await?;

            match format {
                OutputFormat::Json => output::print_item(&report, format),
                OutputFormat::Table => {
                    output::print_kv("Files matched", &report.files_matched.to_string());
                    output::print_kv("Files cleared", &report.files_cleared.to_string());
                    output::print_kv("Failures", &report.failures.to_string());
                }
            }

            if report.failures > 0 {
                output::print_warning(&format!(
                    "{} file(s) could not be saved; see the log for details",
                    report.failures
                ));
            } else {
                output::print_success("Stale locks purged.");
            }
        }
    }

    Ok(())
}
