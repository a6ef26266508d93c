//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A bounded level was outside its scale.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    /// A duration of zero minutes was given; point-in-time entries omit the duration.
    #[error("duration must be at least 1 minute")]
    ZeroDuration,

    /// A clock time string was not `HH:MM` or was out of range.
    #[error("invalid clock time: {value}")]
    InvalidClockTime { value: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated timeline entry identifier.
    ///
    /// Entry IDs are opaque to the core. The host guarantees uniqueness within
    /// the displayed day.
    EntryId, "entry ID"
);

define_string_id!(
    /// A validated activity identifier, resolved against an activity catalog.
    ActivityId, "activity ID"
);

impl ActivityId {
    /// Builds an ID from a compile-time literal known to be non-empty.
    pub(crate) fn from_static(id: &'static str) -> Self {
        debug_assert!(!id.is_empty());
        Self(id.to_string())
    }
}

/// Generates a small bounded level newtype stored as `u8`.
macro_rules! define_level {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal, $min:literal ..= $max:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Lowest accepted value.
            pub const MIN: u8 = $min;
            /// Highest accepted value.
            pub const MAX: u8 = $max;

            /// Creates a new level after validating it against the scale.
            pub const fn new(value: u8) -> Result<Self, ValidationError> {
                if value < Self::MIN || value > Self::MAX {
                    return Err(ValidationError::OutOfRange {
                        field: $field_name,
                        value,
                        min: Self::MIN,
                        max: Self::MAX,
                    });
                }
                Ok(Self(value))
            }

            /// Returns the raw level.
            pub const fn value(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ValidationError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(level: $name) -> Self {
                level.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}/{}", self.0, Self::MAX)
            }
        }
    };
}

define_level!(
    /// Effort put into an activity, 1 to 5.
    Intensity, "intensity", 1..=5
);

define_level!(
    /// How strongly a symptom was felt, 1 to 5.
    Severity, "severity", 1..=5
);

define_level!(
    /// Self-reported mood, 1 to 10.
    MoodLevel, "mood level", 1..=10
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_rejects_empty() {
        assert!(EntryId::new("").is_err());
        assert!(EntryId::new("   ").is_err());
        assert!(EntryId::new("entry-1").is_ok());
    }

    #[test]
    fn entry_id_serde_roundtrip() {
        let id = EntryId::new("entry-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"entry-42\"");
        let parsed: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn entry_id_serde_rejects_empty() {
        let result: Result<EntryId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn activity_id_as_ref() {
        let id = ActivityId::new("act-ex-2").unwrap();
        let s: &str = id.as_ref();
        assert_eq!(s, "act-ex-2");
    }

    #[test]
    fn levels_validate_their_scale() {
        assert!(Intensity::new(0).is_err());
        assert!(Intensity::new(1).is_ok());
        assert!(Intensity::new(5).is_ok());
        assert!(Intensity::new(6).is_err());

        assert!(MoodLevel::new(10).is_ok());
        assert!(MoodLevel::new(11).is_err());
    }

    #[test]
    fn level_error_names_the_field() {
        let err = Severity::new(9).unwrap_err();
        assert_eq!(err.to_string(), "severity must be between 1 and 5, got 9");
    }

    #[test]
    fn level_display_shows_scale() {
        assert_eq!(MoodLevel::new(7).unwrap().to_string(), "7/10");
        assert_eq!(Intensity::new(3).unwrap().to_string(), "3/5");
    }

    #[test]
    fn level_serde_rejects_out_of_range() {
        let parsed: MoodLevel = serde_json::from_str("8").unwrap();
        assert_eq!(parsed.value(), 8);
        let result: Result<MoodLevel, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
