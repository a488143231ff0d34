//! Typed entity identifiers
//!
//! Thin newtypes over the database-assigned 64-bit primary keys. Keeping the
//! id spaces distinct at the type level prevents accidentally passing a todo
//! id where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    #[error("invalid id format")]
    InvalidFormat,
}

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create from a raw i64 value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map($name)
                    .map_err(|_| ParseIdError::InvalidFormat)
            }
        }
    };
}

id_newtype! {
    /// Identifier of a user account
    UserId
}

id_newtype! {
    /// Identifier of a public to-do item
    TodoId
}

id_newtype! {
    /// Identifier of an alarm row
    AlarmId
}
