//! Enumerations stored as PostgreSQL enum types.
//!
//! Variant names map to the database labels and the JSON strings via
//! `SCREAMING_SNAKE_CASE` (`InProgress` <-> `IN_PROGRESS`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a string is not one of an enum's codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_db_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:tt, $type_name:tt) {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:tt, $label:tt) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[sqlx(type_name = $type_name, rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The stored / serialized code.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// Human-readable label for display.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

define_db_enum! {
    /// Lifecycle status shared by projects and tasks.
    ///
    /// Any value may replace any other; no transition order is enforced.
    WorkStatus ("status", "work_status") {
        Planned => ("PLANNED", "Planned"),
        InProgress => ("IN_PROGRESS", "In progress"),
        Aborted => ("ABORTED", "Aborted"),
        Finished => ("FINISHED", "Finished"),
    }
}

define_db_enum! {
    /// Party responsible for carrying out a task.
    TaskResponsible ("responsible", "task_responsible") {
        Plo => ("PLO", "PLO"),
        Gfu => ("GFU", "GFU"),
        Ctb => ("CTB", "CTB"),
        Gbp => ("GBP", "GBP"),
    }
}
