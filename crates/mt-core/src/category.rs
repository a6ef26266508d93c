//! Entry category enum as the single source of truth for category strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of things a timeline entry can record.
///
/// Each category is also a visibility layer. Adding a variant forces every
/// `match` in the renderer and the layer filter to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryCategory {
    Activity,
    Mood,
    Symptom,
}

impl EntryCategory {
    /// All categories in layer display order.
    pub const ALL: [Self; 3] = [Self::Activity, Self::Mood, Self::Symptom];

    /// String representation used in entry files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Mood => "mood",
            Self::Symptom => "symptom",
        }
    }

    /// Icon shown next to the layer toggle and on blocks without their own icon.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Activity => "🎯",
            Self::Mood => "😊",
            Self::Symptom => "🤒",
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" | "activities" => Ok(Self::Activity),
            "mood" => Ok(Self::Mood),
            "symptom" | "symptoms" => Ok(Self::Symptom),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for EntryCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown category strings.
#[derive(Debug, Clone, Error)]
#[error("unknown entry category: {0}")]
pub struct UnknownCategory(String);
