//! Shared fixtures for service tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use seedhub_core::error::AppError;
use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::{FileId, FileQuery, UserId};
use seedhub_database::memory::{MemoryFileStore, MemoryUserStore};
use seedhub_database::{FileStore, UserStore};
use seedhub_entity::file::{CreateFile, File};
use seedhub_entity::user::{CreateUser, User};

use crate::context::RequestContext;
use crate::file::{CommentService, DownloadService, FileService, GradeService, LockService};
use crate::user::UserService;

pub(crate) struct Fixture {
    pub store: Arc<MemoryFileStore>,
    pub users: UserService,
    pub files: FileService,
    pub comments: CommentService,
    pub grades: GradeService,
    pub locks: LockService,
    pub downloads: DownloadService,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_file_store(Arc::new(MemoryFileStore::new()))
    }

    pub fn with_file_store(store: Arc<MemoryFileStore>) -> Self {
        let files: Arc<dyn FileStore> = store.clone();
        Self::build(store, files)
    }

    pub fn build(store: Arc<MemoryFileStore>, files: Arc<dyn FileStore>) -> Self {
        let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let users = UserService::new(user_store);
        Self {
            store,
            files: FileService::new(files.clone(), users.clone()),
            comments: CommentService::new(files.clone(), users.clone()),
            grades: GradeService::new(files.clone()),
            locks: LockService::new(files.clone()),
            downloads: DownloadService::new(files),
            users,
        }
    }

    pub async fn user(&self, login: &str) -> User {
        self.users
            .create_user(CreateUser {
                login: login.to_string(),
                password: "opaque".to_string(),
                mail: format!("{login}@example.org"),
                avatar: format!("/avatars/{login}.png"),
                role: Default::default(),
            })
            .await
            .unwrap()
    }

    pub async fn ctx(&self, login: &str) -> RequestContext {
        let user = self.user(login).await;
        RequestContext::new(user.id, user.role, user.login)
    }

    pub async fn unfinished_file(&self, creator: UserId, name: &str) -> File {
        self.files
            .register_upload(CreateFile {
                name: name.to_string(),
                path: format!("/srv/seed/{name}"),
                size: 2048,
                creator,
                hash_string: format!("hash-{name}"),
                file_type: "archive".to_string(),
                privacy: 1,
            })
            .await
            .unwrap()
    }

    pub async fn finished_file(&self, creator: UserId, name: &str) -> File {
        let file = self.unfinished_file(creator, name).await;
        self.files.mark_finished(file.id).await.unwrap();
        self.reload(&file).await
    }

    pub async fn reload(&self, file: &File) -> File {
        self.store.find_by_id(&file.id).await.unwrap().unwrap()
    }
}

/// File store that can be told to fail saves for particular files, or all
/// lookups by query.
#[derive(Debug, Clone)]
pub(crate) struct FlakyFileStore {
    pub inner: Arc<MemoryFileStore>,
    failing_saves: Arc<Mutex<HashSet<FileId>>>,
    failing_finds: Arc<AtomicBool>,
}

impl FlakyFileStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryFileStore::new()),
            failing_saves: Arc::default(),
            failing_finds: Arc::default(),
        }
    }

    pub fn fail_saves_for(&self, id: FileId) {
        self.failing_saves.lock().unwrap().insert(id);
    }

    pub fn fail_finds(&self) {
        self.failing_finds.store(true, Ordering::SeqCst);
    }

    fn check_find(&self) -> AppResult<()> {
        if self.failing_finds.load(Ordering::SeqCst) {
            return Err(AppError::database("connection reset"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore<File, FileId> for FlakyFileStore {
    async fn find_by_id(&self, id: &FileId) -> AppResult<Option<File>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, file: &File) -> AppResult<File> {
        self.inner.create(file).await
    }

    async fn save(&self, file: &File) -> AppResult<File> {
        if self.failing_saves.lock().unwrap().contains(&file.id) {
            return Err(AppError::database("write rejected"));
        }
        self.inner.save(file).await
    }
}

#[async_trait]
impl FileStore for FlakyFileStore {
    async fn find(&self, query: &FileQuery) -> AppResult<Vec<File>> {
        self.check_find()?;
        self.inner.find(query).await
    }

    async fn find_with_lock_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<File>> {
        self.check_find()?;
        self.inner.find_with_lock_before(cutoff).await
    }
}
