//! Client-local persisted session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use seedhub_core::error::AppError;
use seedhub_entity::user::UserView;

/// Token and profile kept between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSession {
    /// Access token sent as `X-Access-Token`.
    pub token: Option<String>,
    /// Profile of the signed-in user.
    pub user: Option<UserView>,
}

impl ClientSession {
    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// JSON file holding a [`ClientSession`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// A store at `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved session. A missing file is an empty session.
    pub async fn load(&self) -> Result<ClientSession, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved session");
                Ok(ClientSession::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `session`, creating parent directories as needed.
    pub async fn save(&self, session: &ClientSession) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Removes the saved session, if any.
    pub async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
