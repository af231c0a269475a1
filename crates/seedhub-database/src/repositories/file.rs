//! PostgreSQL file store.
//!
//! Each file is one row; `comments`, `locked`, and `grades` are JSONB
//! arrays written back whole on every save.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use seedhub_core::error::{AppError, ErrorKind};
use seedhub_core::result::AppResult;
use seedhub_core::traits::DocumentStore;
use seedhub_core::types::{FileId, FileQuery, FilterField, FilterOp, FilterValue};
use seedhub_entity::file::File;

use crate::store::FileStore;

const HASH_CONSTRAINT: &str = "files_hash_string_key";

/// File store backed by the `files` table.
#[derive(Debug, Clone)]
pub struct PgFileStore {
    pool: PgPool,
}

impl PgFileStore {
    /// Create a new file store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore<File, FileId> for PgFileStore {
    async fn find_by_id(&self, id: &FileId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn create(&self, file: &File) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            r#"INSERT INTO files (id, name, path, size, creator, hash_string, is_finished,
                file_type, downloads, privacy, comments, locked, grades, created_at, torrent_added_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *"#,
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(&file.path)
        .bind(file.size)
        .bind(file.creator)
        .bind(&file.hash_string)
        .bind(file.is_finished)
        .bind(&file.file_type)
        .bind(file.downloads)
        .bind(file.privacy)
        .bind(Json(&file.comments))
        .bind(Json(&file.locked))
        .bind(Json(&file.grades))
        .bind(file.created_at)
        .bind(file.torrent_added_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(HASH_CONSTRAINT) => {
                AppError::conflict(format!(
                    "A file with hash '{}' already exists",
                    file.hash_string
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create file", e),
        })
    }

    async fn save(&self, file: &File) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            r#"UPDATE files SET name = $2, path = $3, size = $4, creator = $5, hash_string = $6,
                is_finished = $7, file_type = $8, downloads = $9, privacy = $10,
                comments = $11, locked = $12, grades = $13, torrent_added_at = $14
            WHERE id = $1
            RETURNING *"#,
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(&file.path)
        .bind(file.size)
        .bind(file.creator)
        .bind(&file.hash_string)
        .bind(file.is_finished)
        .bind(&file.file_type)
        .bind(file.downloads)
        .bind(file.privacy)
        .bind(Json(&file.comments))
        .bind(Json(&file.locked))
        .bind(Json(&file.grades))
        .bind(file.torrent_added_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(HASH_CONSTRAINT) => {
                AppError::conflict(format!(
                    "A file with hash '{}' already exists",
                    file.hash_string
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save file", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("File {} not found", file.id)))
    }
}

#[async_trait]
impl FileStore for PgFileStore {
    async fn find(&self, query: &FileQuery) -> AppResult<Vec<File>> {
        let mut builder = build_find_query(query);
        builder
            .build_query_as::<File>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query files", e))
    }

    async fn find_with_lock_before(&self, cutoff: DateTime<Utc>) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            r#"SELECT * FROM files
            WHERE EXISTS (
                SELECT 1 FROM jsonb_array_elements(locked) AS l
                WHERE (l->>'created_at')::timestamptz < $1
            )
            ORDER BY id ASC"#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find files with stale locks", e)
        })
    }
}

/// Render a [`FileQuery`] as a bound `SELECT`.
fn build_find_query(query: &FileQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM files WHERE TRUE");

    if let Some(finished) = query.finished {
        builder.push(" AND is_finished = ").push_bind(finished);
    }

    for filter in &query.filters {
        builder.push(" AND ");
        push_filter(&mut builder, filter);
    }

    if let Some(user) = query.locked_by {
        builder
            .push(" AND locked @> ")
            .push_bind(Json(serde_json::json!([{ "user": user }])));
    }

    builder.push(" ORDER BY ");
    if let (Some(user), Some(direction)) = (query.locked_by, query.lock_order) {
        builder
            .push(
                "(SELECT (l->>'created_at')::timestamptz FROM jsonb_array_elements(locked) AS l \
                 WHERE l->>'user' = ",
            )
            .push_bind(user.to_string())
            .push(" LIMIT 1) ")
            .push(direction.as_sql())
            .push(", ");
    }
    for sort in &query.sort {
        builder
            .push(sort.field.column())
            .push(" ")
            .push(sort.direction.as_sql())
            .push(", ");
    }
    builder.push("id ASC");

    if let Some(limit) = query.limit {
        builder
            .push(" LIMIT ")
            .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
    }

    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &FilterField) {
    builder
        .push(filter.field.column())
        .push(" ")
        .push(filter.op.as_sql())
        .push(" ");
    match (&filter.value, filter.op) {
        (FilterValue::Text(text), FilterOp::Contains) => {
            builder.push_bind(format!("%{}%", escape_like(text)));
        }
        (FilterValue::Text(text), _) => {
            builder.push_bind(text.clone());
        }
        (FilterValue::Integer(n), _) => {
            builder.push_bind(*n);
        }
        (FilterValue::Id(id), _) => {
            builder.push_bind(*id);
        }
        (FilterValue::Timestamp(at), _) => {
            builder.push_bind(*at);
        }
    }
}

/// Escape `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedhub_core::types::{FileField, SortDirection, SortField, UserId};

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_find_query_sql_shape() {
        let query = FileQuery::new()
            .finished(true)
            .with_filters(vec![FilterField::contains(FileField::Name, "iso")])
            .with_sort(vec![SortField::desc(FileField::Downloads)])
            .with_limit(10);
        let sql = build_find_query(&query).sql().to_string();
        assert_eq!(
            sql,
            "SELECT * FROM files WHERE TRUE AND is_finished = $1 AND name ILIKE $2 \
             ORDER BY downloads DESC, id ASC LIMIT $3"
        );
    }

    #[test]
    fn test_locked_by_orders_by_lock_age_first() {
        let query = FileQuery::new()
            .finished(true)
            .locked_by(UserId::new(), SortDirection::Asc);
        let sql = build_find_query(&query).sql().to_string();
        assert!(sql.contains("locked @> $2"));
        assert!(sql.contains("WHERE l->>'user' = $3 LIMIT 1) ASC, id ASC"));
        assert!(!sql.contains("LIMIT $"));
    }
}
