//! Lock mutations and the stale-lock sweep.
//!
//! A lock is a per-user reservation marker, not a mutex: several users may
//! hold one on the same file at once.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use serde::Serialize;
use tracing::{info, warn};

use seedhub_core::error::AppError;
use seedhub_core::types::FileId;
use seedhub_database::FileStore;

use super::load_file;
use crate::context::RequestContext;

/// Outcome of a stale-lock sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurgeReport {
    /// Files that held at least one stale lock.
    pub files_matched: usize,
    /// Files whose lock set was emptied and saved.
    pub files_cleared: usize,
    /// Files whose save failed.
    pub failures: usize,
}

/// Takes and releases locks, and purges stale ones.
#[derive(Debug, Clone)]
pub struct LockService {
    /// File store.
    files: Arc<dyn FileStore>,
}

impl LockService {
    /// Creates a new lock service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Takes a lock on the file for the caller.
    pub async fn add_lock(&self, ctx: &RequestContext, file_id: FileId) -> Result<(), AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.add_lock(ctx.user_id)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, "File locked");
        Ok(())
    }

    /// Releases the caller's lock on the file.
    pub async fn remove_lock(&self, ctx: &RequestContext, file_id: FileId) -> Result<(), AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.remove_lock(ctx.user_id)?;
        self.files.save(&file).await?;

        info!(file_id = %file_id, user_id = %ctx.user_id, "File unlocked");
        Ok(())
    }

    /// Drops every lock on the file. Returns how many were held.
    pub async fn clear_all_locks(&self, file_id: FileId) -> Result<usize, AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        let cleared = file.clear_locks();
        self.files.save(&file).await?;

        info!(file_id = %file_id, cleared, "All locks cleared");
        Ok(cleared)
    }

    /// Whether anybody, and whether the caller, holds a lock on the file.
    pub async fn lock_status(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
    ) -> Result<(bool, bool), AppError> {
        let file = load_file(self.files.as_ref(), file_id).await?;
        Ok((file.is_locked(), file.is_locked_by(ctx.user_id)))
    }

    /// Clears the entire lock set of every file holding a lock older than
    /// `max_age_days`, fresh locks on those files included.
    ///
    /// Failing to find candidates aborts the sweep. A failed save is logged
    /// and counted, and the sweep moves on to the next file.
    pub async fn purge_stale_locks(&self, max_age_days: u32) -> Result<PurgeReport, AppError> {
        // A window reaching past the earliest representable instant holds no lock.
        let Some(cutoff) = TimeDelta::try_days(i64::from(max_age_days))
            .and_then(|age| Utc::now().checked_sub_signed(age))
        else {
            info!(max_age_days, "Retention window exceeds the calendar, nothing to purge");
            return Ok(PurgeReport::default());
        };
        info!(max_age_days, %cutoff, "Purging stale locks");

        let files = self.files.find_with_lock_before(cutoff).await?;
        let mut report = PurgeReport {
            files_matched: files.len(),
            ..PurgeReport::default()
        };

        for mut file in files {
            let held = file.clear_locks();
            match self.files.save(&file).await {
                Ok(_) => report.files_cleared += 1,
                Err(e) => {
                    report.failures += 1;
                    warn!(file_id = %file.id, locks = held, error = %e, "Failed to clear stale locks");
                }
            }
        }

        info!(
            matched = report.files_matched,
            cleared = report.files_cleared,
            failures = report.failures,
            "Stale lock purge complete"
        );
        Ok(report)
    }
}
