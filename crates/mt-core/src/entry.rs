//! Logged occurrences shown on the timeline.
//!
//! Entries belong to the host. The core reads them, never mutates them, and
//! only proposes new ones through callbacks.

use std::num::NonZeroU32;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::category::EntryCategory;
use crate::grid::{ClockTime, MINUTES_PER_HOUR};
use crate::types::{ActivityId, EntryId, Intensity, MoodLevel, Severity, ValidationError};

/// A single logged activity, mood or symptom occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Stable identifier, unique within the displayed day.
    pub id: EntryId,
    /// Local wall-clock time the entry starts at.
    pub timestamp: NaiveDateTime,
    /// Length in minutes. Absent for point-in-time entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<NonZeroU32>,
    /// Category-specific fields.
    pub payload: EntryPayload,
}

/// Category-specific entry fields.
///
/// The variant is the category; there is no separate tag to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum EntryPayload {
    Activity {
        activity_id: ActivityId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intensity: Option<Intensity>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Mood {
        level: MoodLevel,
        #[serde(default)]
        emotions: Vec<Emotion>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Symptom {
        #[serde(default)]
        symptoms: Vec<SymptomRecord>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl EntryPayload {
    pub const fn category(&self) -> EntryCategory {
        match self {
            Self::Activity { .. } => EntryCategory::Activity,
            Self::Mood { .. } => EntryCategory::Mood,
            Self::Symptom { .. } => EntryCategory::Symptom,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Activity { note, .. } | Self::Mood { note, .. } | Self::Symptom { note, .. } => {
                note.as_deref()
            }
        }
    }
}

/// Emotion tags attached to a mood entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Joy,
    Calm,
    Energy,
    Anxiety,
    Sadness,
    Anger,
    Neutral,
}

/// Physical symptoms that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKind {
    Headache,
    Fatigue,
    MuscleTension,
    StomachAche,
    Insomnia,
    HeartRacing,
    Dizziness,
    BackPain,
    ChestTightness,
    Nausea,
}

/// One symptom and how strongly it was felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    pub kind: SymptomKind,
    pub severity: Severity,
}

impl TimelineEntry {
    /// Creates a point-in-time entry.
    pub const fn new(id: EntryId, timestamp: NaiveDateTime, payload: EntryPayload) -> Self {
        Self {
            id,
            timestamp,
            duration: None,
            payload,
        }
    }

    /// Sets the duration in minutes. Zero is rejected.
    pub fn with_duration(mut self, minutes: u32) -> Result<Self, ValidationError> {
        self.duration = Some(NonZeroU32::new(minutes).ok_or(ValidationError::ZeroDuration)?);
        Ok(self)
    }

    pub const fn category(&self) -> EntryCategory {
        self.payload.category()
    }

    /// Duration in minutes, if any.
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration.map(NonZeroU32::get)
    }

    /// Minutes since midnight of the entry's start. Seconds are ignored.
    pub fn minute_of_day(&self) -> u32 {
        self.timestamp.hour() * MINUTES_PER_HOUR + self.timestamp.minute()
    }

    pub fn clock_time(&self) -> ClockTime {
        ClockTime::from(self.timestamp.time())
    }

    /// The calendar day the entry is shown on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date() == date
    }
}
