//! Sorting types for list queries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::FileField;
use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    /// Accepts `asc`/`desc` as well as the numeric `1`/`-1` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "1" => Ok(Self::Asc),
            "desc" | "-1" => Ok(Self::Desc),
            _ => Err(AppError::validation(format!(
                "Invalid sort order: '{s}'. Expected asc or desc"
            ))),
        }
    }
}

/// A sort specification consisting of a field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field to sort by.
    pub field: FileField,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: FileField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: FileField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: FileField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parses_numeric_form() {
        assert_eq!("-1".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
