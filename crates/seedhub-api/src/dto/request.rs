//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use seedhub_core::error::AppError;
use seedhub_core::types::{
    FileField, FilterField, FilterOp, FilterValue, SortDirection, SortField, UserId,
};

/// Query string of `GET /api/files`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilesQuery {
    /// Field to sort by.
    pub sort: Option<String>,
    /// `asc`/`desc` (or `1`/`-1`); ascending when absent.
    pub order: Option<String>,
    /// Maximum number of results; zero or absent means unlimited.
    pub limit: Option<i64>,
    /// Case-insensitive substring of the file name.
    pub name: Option<String>,
    /// Exact type label.
    pub file_type: Option<String>,
    /// Uploader.
    pub creator: Option<UserId>,
}

impl ListFilesQuery {
    /// Conditions expressed by the query string.
    pub fn filters(&self) -> Vec<FilterField> {
        let mut filters = Vec::new();
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            filters.push(FilterField::contains(FileField::Name, name));
        }
        if let Some(file_type) = &self.file_type {
            filters.push(FilterField::eq(FileField::FileType, file_type.clone()));
        }
        if let Some(creator) = self.creator {
            filters.push(FilterField::new(
                FileField::Creator,
                FilterOp::Eq,
                FilterValue::Id(creator.into_uuid()),
            ));
        }
        filters
    }

    /// Sort keys expressed by the query string.
    pub fn sort(&self) -> Result<Vec<SortField>, AppError> {
        let Some(field) = &self.sort else {
            return Ok(Vec::new());
        };
        let field: FileField = field.parse()?;
        Ok(vec![SortField::new(field, parse_order(self.order.as_deref())?)])
    }
}

/// Query string of `GET /api/files/locked`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LockedFilesQuery {
    /// Order of lock creation time.
    pub order: Option<String>,
    /// Maximum number of results; zero or absent means unlimited.
    pub limit: Option<i64>,
}

impl LockedFilesQuery {
    /// Requested lock-time order.
    pub fn direction(&self) -> Result<SortDirection, AppError> {
        parse_order(self.order.as_deref())
    }
}

fn parse_order(order: Option<&str>) -> Result<SortDirection, AppError> {
    order.map_or(Ok(SortDirection::Asc), str::parse)
}

/// Body of comment create and edit requests.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 4000, message = "Comment must be 1-4000 characters"))]
    pub text: String,
}

/// Body of grade add and edit requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The grade value.
    pub grade: f64,
}

impl GradeRequest {
    /// Rejects NaN and infinities.
    pub fn checked(&self) -> Result<f64, AppError> {
        if self.grade.is_finite() {
            Ok(self.grade)
        } else {
            Err(AppError::validation("Grade must be a finite number"))
        }
    }
}
