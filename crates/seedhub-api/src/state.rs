//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use seedhub_auth::TokenDecoder;
use seedhub_core::config::AppConfig;
use seedhub_database::Stores;
use seedhub_service::{
    CommentService, DownloadService, FileService, GradeService, LockService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Store handles, kept for health checks
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// Access token verifier
    pub token_decoder: Arc<TokenDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// User display lookups
    pub user_service: Arc<UserService>,
    /// File queries
    pub file_service: Arc<FileService>,
    /// Comment mutations
    pub comment_service: Arc<CommentService>,
    /// Grade mutations
    pub grade_service: Arc<GradeService>,
    /// Lock mutations
    pub lock_service: Arc<LockService>,
    /// Download counting
    pub download_service: Arc<DownloadService>,
}

impl AppState {
    /// Wires every service onto the given stores.
    pub fn new(config: AppConfig, stores: &Stores) -> Self {
        let users = UserService::new(Arc::clone(&stores.users));
        let files = Arc::clone(&stores.files);

        Self {
            token_decoder: Arc::new(TokenDecoder::new(&config.auth)),
            file_service: Arc::new(FileService::new(Arc::clone(&files), users.clone())),
            comment_service: Arc::new(CommentService::new(Arc::clone(&files), users.clone())),
            grade_service: Arc::new(GradeService::new(Arc::clone(&files))),
            lock_service: Arc::new(LockService::new(Arc::clone(&files))),
            download_service: Arc::new(DownloadService::new(files)),
            user_service: Arc::new(users),
            config: Arc::new(config),
            stores: stores.clone(),
        }
    }
}
