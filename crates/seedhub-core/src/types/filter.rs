//! Filter types for dynamic file queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::field::FileField;
use crate::error::AppError;

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Case-insensitive substring match.
    Contains,
}

impl FilterOp {
    /// SQL comparison operator. `Contains` is rendered as `ILIKE`.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Contains => "ILIKE",
        }
    }
}

/// A typed filter operand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    Text(String),
    /// An integer value.
    Integer(i64),
    /// An entity identifier.
    Id(Uuid),
    /// A point in time.
    Timestamp(DateTime<Utc>),
}

/// A single filter condition on a file field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterField {
    /// The field to filter on.
    pub field: FileField,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: FileField, op: FilterOp, value: FilterValue) -> Self {
        Self { field, op, value }
    }

    /// Shorthand for a text equality filter.
    pub fn eq(field: FileField, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::Text(value.into()))
    }

    /// Shorthand for a case-insensitive substring filter.
    pub fn contains(field: FileField, needle: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Contains, FilterValue::Text(needle.into()))
    }

    /// Reject operator/value combinations the field cannot evaluate.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.field.accepts(self.op, &self.value) {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Filter {:?} with {:?} is not supported on '{}'",
                self.op, self.value, self.field
            )))
        }
    }
}
