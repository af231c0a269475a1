//! Filter and sort evaluation against in-memory files.

use std::cmp::Ordering;

use seedhub_core::types::{FileField, FilterField, FilterOp, FilterValue, SortField};
use seedhub_entity::file::File;

/// Whether `file` satisfies `filter`.
pub(crate) fn matches(file: &File, filter: &FilterField) -> bool {
    if filter.op == FilterOp::Contains {
        return match (filter.field, &filter.value) {
            (FileField::Name, FilterValue::Text(needle)) => contains_ci(&file.name, needle),
            (FileField::FileType, FilterValue::Text(needle)) => {
                contains_ci(&file.file_type, needle)
            }
            _ => false,
        };
    }

    let ordering = match (filter.field, &filter.value) {
        (FileField::Name, FilterValue::Text(v)) => file.name.as_str().cmp(v.as_str()),
        (FileField::FileType, FilterValue::Text(v)) => file.file_type.as_str().cmp(v.as_str()),
        (FileField::Size, FilterValue::Integer(v)) => file.size.cmp(v),
        (FileField::Downloads, FilterValue::Integer(v)) => file.downloads.cmp(v),
        (FileField::Privacy, FilterValue::Integer(v)) => i64::from(file.privacy).cmp(v),
        (FileField::Creator, FilterValue::Id(v)) => file.creator.as_uuid().cmp(v),
        (FileField::CreatedAt, FilterValue::Timestamp(v)) => file.created_at.cmp(v),
        _ => return false,
    };

    match filter.op {
        FilterOp::Eq => ordering == Ordering::Equal,
        FilterOp::Ne => ordering != Ordering::Equal,
        FilterOp::Gt => ordering == Ordering::Greater,
        FilterOp::Gte => ordering != Ordering::Less,
        FilterOp::Lt => ordering == Ordering::Less,
        FilterOp::Lte => ordering != Ordering::Greater,
        FilterOp::Contains => false,
    }
}

/// Compare two files on a single sort key.
pub(crate) fn compare(a: &File, b: &File, sort: &SortField) -> Ordering {
    let ordering = match sort.field {
        FileField::Name => a.name.cmp(&b.name),
        FileField::Size => a.size.cmp(&b.size),
        FileField::FileType => a.file_type.cmp(&b.file_type),
        FileField::Downloads => a.downloads.cmp(&b.downloads),
        FileField::Privacy => a.privacy.cmp(&b.privacy),
        FileField::Creator => a.creator.as_uuid().cmp(b.creator.as_uuid()),
        FileField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    sort.direction.apply(ordering)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
