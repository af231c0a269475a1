//! Download counting.

use std::sync::Arc;

use tracing::{debug, warn};

use seedhub_core::error::AppError;
use seedhub_core::types::FileId;
use seedhub_database::FileStore;

use super::load_file;

/// Counts downloads of a file.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// File store.
    files: Arc<dyn FileStore>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Adds one to the file's download counter.
    ///
    /// Only a failed lookup is reported. A failed save is logged and
    /// swallowed so that serving the content never depends on the counter.
    pub async fn record_download(&self, file_id: FileId) -> Result<(), AppError> {
        let mut file = load_file(self.files.as_ref(), file_id).await?;
        file.increment_downloads();

        match self.files.save(&file).await {
            Ok(_) => debug!(file_id = %file_id, downloads = file.downloads, "Download recorded"),
            Err(e) => warn!(file_id = %file_id, error = %e, "Download increment failed"),
        }
        Ok(())
    }
}
