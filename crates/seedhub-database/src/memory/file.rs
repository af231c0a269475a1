//! In-memory file store.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use seedhub_core::error::AppError;
use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::{FileId, FileQuery};
use seedhub_entity::file::File;

use super::eval::{compare, matches};
use crate::store::FileStore;

/// File store holding documents in a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: Arc<DashMap<FileId, File>>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn hash_taken(&self, file: &File) -> bool {
        self.files
            .iter()
            .any(|entry| entry.id != file.id && entry.hash_string == file.hash_string)
    }

    fn duplicate_hash(file: &File) -> AppError {
        AppError::conflict(format!(
            "A file with hash '{}' already exists",
            file.hash_string
        ))
    }
}

#[async_trait]
impl DocumentStore<File, FileId> for MemoryFileStore {
    async fn find_by_id(&self, id: &FileId) -> AppResult<Option<File>> {
        Ok(self.files.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, file: &File) -> AppResult<File> {
        if self.files.contains_key(&file.id) {
            return Err(AppError::conflict(format!("File {} already exists", file.id)));
        }
        if self.hash_taken(file) {
            return Err(Self::duplicate_hash(file));
        }
        self.files.insert(file.id, file.clone());
        Ok(file.clone())
    }

    async fn save(&self, file: &File) -> AppResult<File> {
        if self.hash_taken(file) {
            return Err(Self::duplicate_hash(file));
        }
        match self.files.get_mut(&file.id) {
            Some(mut entry) => {
                *entry = file.clone();
                Ok(file.clone())
            }
            None => Err(AppError::not_found(format!("File {} not found", file.id))),
        }
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn find(&self, query: &FileQuery) -> AppResult<Vec<File>> {
        let mut found: Vec<File> = self
            .files
            .iter()
            .filter(|entry| query.finished.is_none_or(|f| entry.is_finished == f))
            .filter(|entry| query.locked_by.is_none_or(|user| entry.is_locked_by(user)))
            .filter(|entry| query.filters.iter().all(|filter| matches(entry.value(), filter)))
            .map(|entry| entry.value().clone())
            .collect();

        found.sort_by(|a, b| {
            let by_lock = match (query.locked_by, query.lock_order) {
                (Some(user), Some(direction)) => {
                    let at = |f: &File| f.lock_of(user).map(|l| l.created_at);
                    direction.apply(at(a).cmp(&at(b)))
                }
                _ => Ordering::Equal,
            };
            query
                .sort
                .iter()
                .fold(by_lock, |acc, sort| acc.then_with(|| compare(a, b, sort)))
                .then_with(|| a.id.cmp(&b.id))
        });

        if let Some(limit) = query.limit {
            found.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(found)
    }

    async fn find_with_lock_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<File>> {
        let mut found: Vec<File> = self
            .files
            .iter()
            .filter(|entry| entry.has_lock_before(cutoff))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by_key(|f| f.id);
        Ok(found)
    }
}
