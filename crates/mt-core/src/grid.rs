//! The 24-hour coordinate space every other component draws into.
//!
//! One minute is one unit of vertical extent. Offsets are fractions of the
//! container height in `[0, 1)`, so the same numbers work for a 1440px column
//! and a 96-row terminal. Out-of-range inputs are clamped, never rejected:
//! a pointer sitting exactly on the bottom edge still maps to 23:59.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * MINUTES_PER_HOUR;

/// Last addressable minute of the day (23:59).
pub const LAST_MINUTE: u32 = MINUTES_PER_DAY - 1;

/// Quantization applied to pointer positions.
pub const SNAP_INTERVAL_MINUTES: u32 = 15;

/// Clamps a minute count into `[0, LAST_MINUTE]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_minutes(minutes: i64) -> u32 {
    minutes.clamp(0, i64::from(LAST_MINUTE)) as u32
}

/// Maps a minute of the day to its top offset, a fraction in `[0, 1)`.
pub fn minutes_to_offset(minutes: i64) -> f64 {
    f64::from(clamp_minutes(minutes)) / f64::from(MINUTES_PER_DAY)
}

/// Maps a length in minutes to a fraction of the day, capped at the whole day.
///
/// Unlike [`minutes_to_offset`] this accepts the full 1440 minutes, since a
/// block may legitimately span the entire day.
pub fn span_to_fraction(minutes: u32) -> f64 {
    f64::from(minutes.min(MINUTES_PER_DAY)) / f64::from(MINUTES_PER_DAY)
}

/// Inverse of [`minutes_to_offset`]: maps a fraction back to a minute of the day.
///
/// NaN maps to midnight; anything outside `[0, 1)` is clamped to the first or
/// last minute.
pub fn offset_to_minutes(fraction: f64) -> u32 {
    if fraction.is_nan() {
        return 0;
    }
    clamp_fractional_minutes((fraction * f64::from(MINUTES_PER_DAY)).round())
}

/// Rounds raw minutes to the nearest snap interval, then clamps to the day.
///
/// The clamp happens after rounding, so anything at or past 23:53 lands on
/// 23:59 rather than on the next midnight.
pub fn snap(minutes: f64) -> u32 {
    if minutes.is_nan() {
        return 0;
    }
    let interval = f64::from(SNAP_INTERVAL_MINUTES);
    clamp_fractional_minutes((minutes / interval).round() * interval)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_fractional_minutes(minutes: f64) -> u32 {
    minutes.clamp(0.0, f64::from(LAST_MINUTE)) as u32
}

/// A wall-clock position on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Builds a clock time from minutes since midnight, clamping to 23:59.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes.min(LAST_MINUTE);
        // Both parts fit in u8 after the clamp.
        let hour = u8::try_from(minutes / MINUTES_PER_HOUR).unwrap_or(23);
        let minute = u8::try_from(minutes % MINUTES_PER_HOUR).unwrap_or(59);
        Self { hour, minute }
    }

    /// Builds a clock time from its parts.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if u32::from(hour) >= HOURS_PER_DAY || u32::from(minute) >= MINUTES_PER_HOUR {
            return Err(ValidationError::InvalidClockTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }

    /// The same time as a chrono value, for building timestamps.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self::from_minutes(time.hour() * MINUTES_PER_HOUR + time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidClockTime {
            value: s.to_string(),
        };
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One hour row of the backdrop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    pub hour: u32,
    /// `HH:00`.
    pub label: String,
    /// Offset of the hour's top gridline.
    pub top: f64,
    /// Offset of the fainter half-hour rule inside the row.
    pub half_hour: f64,
}

/// The 24 hour rows of the static backdrop, midnight first.
pub fn hour_lines() -> Vec<HourLine> {
    (0..HOURS_PER_DAY)
        .map(|hour| {
            let start = i64::from(hour * MINUTES_PER_HOUR);
            HourLine {
                hour,
                label: format!("{hour:02}:00"),
                top: minutes_to_offset(start),
                half_hour: minutes_to_offset(start + i64::from(MINUTES_PER_HOUR / 2)),
            }
        })
        .collect()
}

/// Where the timeline column sits on screen, in the pointer's coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerGeometry {
    pub top: f64,
    pub height: f64,
}

impl ContainerGeometry {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// A column starting at zero, one unit per minute.
    pub fn one_unit_per_minute() -> Self {
        Self::new(0.0, f64::from(MINUTES_PER_DAY))
    }

    /// Converts a pointer coordinate into a fraction of the day.
    ///
    /// Returns `None` when the geometry cannot be used (zero or negative
    /// height, non-finite values). The fraction itself is not clamped.
    pub fn offset_of(&self, client_y: f64) -> Option<f64> {
        let usable = self.top.is_finite() && self.height.is_finite() && self.height > 0.0;
        if !usable || !client_y.is_finite() {
            return None;
        }
        Some((client_y - self.top) / self.height)
    }

    /// Converts a pointer coordinate into a snapped minute of the day.
    pub fn snapped_minutes(&self, client_y: f64) -> Option<u32> {
        self.offset_of(client_y)
            .map(|fraction| snap(fraction * f64::from(MINUTES_PER_DAY)))
    }
}

impl Default for ContainerGeometry {
    fn default() -> Self {
        Self::one_unit_per_minute()
    }
}
