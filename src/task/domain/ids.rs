//! Identifier types for the task board domain.
//!
//! Identifiers are assigned by the remote service. The store treats them as
//! opaque grouping and lookup keys, so each wraps a plain integer and
//! serialises transparently.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its raw value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Server-assigned identifier of a task.
    TaskId
);

numeric_id!(
    /// Identifier of a column, used only as a grouping key.
    ColumnId
);

numeric_id!(
    /// Identifier of the board a set of columns belongs to.
    BoardId
);
