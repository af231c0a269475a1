//! Identifier newtypes.
//!
//! Every id is a UUID v7, so ids sort in creation order. Stores rely on that
//! for their final tie-break.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Mints a fresh id.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// The raw UUID.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Borrows the raw UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// An account.
    UserId
);

define_id!(
    /// A shared file.
    FileId
);

define_id!(
    /// A comment inside a file's thread.
    CommentId
);
