//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are assigned by the store on first insert (a generated
//! primary key), so they wrap a positive `i64` rather than being minted
//! client-side. The newtype keeps employee ids from being mixed up with
//! arbitrary integers and guarantees positivity once constructed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

use crate::error::CoreError;

/// Errors raised when parsing an identifier from text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("Invalid identifier: {0}")]
    Invalid(#[from] ParseIntError),

    #[error("Identifier must be positive, got {0}")]
    NonPositive(i64),
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a store-assigned key
            ///
            /// # Errors
            ///
            /// Returns `CoreError::Validation` if `value` is zero or negative
            pub fn new(value: i64) -> Result<Self, CoreError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(CoreError::validation(format!(
                        "{} must be positive, got {}",
                        stringify!($name),
                        value
                    )))
                }
            }

            /// Returns the underlying key
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                let value: i64 = raw.trim().parse()?;
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(IdParseError::NonPositive(value))
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CoreError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(EmployeeId, "EMP");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_display() {
        let id = EmployeeId::new(42).unwrap();
        assert_eq!(id.to_string(), "EMP-42");
    }

    #[test]
    fn test_id_parsing() {
        let original = EmployeeId::new(7).unwrap();
        let parsed: EmployeeId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(EmployeeId::new(0).is_err());
    }
}
