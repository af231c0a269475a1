//! File query specification shared by every store implementation.

use serde::Serialize;

use super::filter::FilterField;
use super::id::UserId;
use super::sorting::{SortDirection, SortField};

/// Describes which files a store should return and in which order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileQuery {
    /// Conditions that must all hold.
    pub filters: Vec<FilterField>,
    /// Required value of the finished flag, if any.
    pub finished: Option<bool>,
    /// Only files this user holds a lock on.
    pub locked_by: Option<UserId>,
    /// Order by the `locked_by` user's lock creation time. Applied before
    /// `sort`.
    pub lock_order: Option<SortDirection>,
    /// Sort keys, most significant first.
    pub sort: Vec<SortField>,
    /// Maximum number of results; `None` is unlimited.
    pub limit: Option<u64>,
}

impl FileQuery {
    /// Start an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add filter conditions.
    pub fn with_filters(mut self, filters: Vec<FilterField>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Set the sort keys.
    pub fn with_sort(mut self, sort: Vec<SortField>) -> Self {
        self.sort = sort;
        self
    }

    /// Set the result cap. Zero or negative means unlimited.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = u64::try_from(limit).ok().filter(|l| *l > 0);
        self
    }

    /// Require the given finished state.
    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    /// Restrict to files locked by `user`, ordered by that lock's age.
    pub fn locked_by(mut self, user: UserId, order: SortDirection) -> Self {
        self.locked_by = Some(user);
        self.lock_order = Some(order);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_limit_is_unlimited() {
        assert_eq!(FileQuery::new().with_limit(0).limit, None);
        assert_eq!(FileQuery::new().with_limit(-5).limit, None);
        assert_eq!(FileQuery::new().with_limit(12).limit, Some(12));
    }
}
