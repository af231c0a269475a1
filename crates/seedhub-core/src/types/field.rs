//! Queryable file fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::filter::{FilterOp, FilterValue};
use crate::error::AppError;

/// File attributes that may appear in list filters and sort specs.
///
/// Internal attributes (storage path, content hash, processing flags) are
/// deliberately absent so that clients can neither filter nor order by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileField {
    /// Display name.
    Name,
    /// Size in bytes.
    Size,
    /// Free-form type label.
    FileType,
    /// Download counter.
    Downloads,
    /// Privacy tier.
    Privacy,
    /// Uploading user.
    Creator,
    /// Creation timestamp.
    CreatedAt,
}

impl FileField {
    /// Column name in the `files` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::FileType => "file_type",
            Self::Downloads => "downloads",
            Self::Privacy => "privacy",
            Self::Creator => "creator",
            Self::CreatedAt => "created_at",
        }
    }

    /// Whether `op` with `value` is a meaningful comparison on this field.
    pub fn accepts(&self, op: FilterOp, value: &FilterValue) -> bool {
        match (self, value) {
            (Self::Name | Self::FileType, FilterValue::Text(_)) => {
                matches!(op, FilterOp::Eq | FilterOp::Ne | FilterOp::Contains)
            }
            (Self::Size | Self::Downloads | Self::Privacy, FilterValue::Integer(_)) => {
                op != FilterOp::Contains
            }
            (Self::Creator, FilterValue::Id(_)) => matches!(op, FilterOp::Eq | FilterOp::Ne),
            (Self::CreatedAt, FilterValue::Timestamp(_)) => op != FilterOp::Contains,
            _ => false,
        }
    }
}

impl fmt::Display for FileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for FileField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "file_type" | "fileType" => Ok(Self::FileType),
            "downloads" => Ok(Self::Downloads),
            "privacy" => Ok(Self::Privacy),
            "creator" => Ok(Self::Creator),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            _ => Err(AppError::validation(format!("Unknown file field: '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_camel_case_aliases() {
        assert_eq!("fileType".parse::<FileField>().unwrap(), FileField::FileType);
        assert_eq!("created_at".parse::<FileField>().unwrap(), FileField::CreatedAt);
        assert!("hash_string".parse::<FileField>().is_err());
        assert!("path".parse::<FileField>().is_err());
    }

    #[test]
    fn test_accepts_type_compatible_filters_only() {
        let text = FilterValue::Text("x".into());
        assert!(FileField::Name.accepts(FilterOp::Contains, &text));
        assert!(!FileField::Name.accepts(FilterOp::Gt, &text));
        assert!(!FileField::Size.accepts(FilterOp::Eq, &text));
        assert!(FileField::Size.accepts(FilterOp::Gte, &FilterValue::Integer(10)));
        assert!(!FileField::Size.accepts(FilterOp::Contains, &FilterValue::Integer(10)));
    }
}
