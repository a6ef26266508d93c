//! Placement and summary content of entry blocks.
//!
//! Each entry is positioned on its own. Overlapping entries are not laid out
//! in lanes: they stack in render order, and the later one is drawn on top.

use serde::Serialize;

use crate::catalog::ActivityCatalog;
use crate::category::EntryCategory;
use crate::entry::{EntryPayload, TimelineEntry};
use crate::grid::{minutes_to_offset, span_to_fraction};
use crate::labels::Locale;
use crate::types::EntryId;

/// Visual length of a point-in-time entry.
pub const DEFAULT_BLOCK_MINUTES: u32 = 30;

/// Floor on block height so short entries stay clickable (2% of the day).
pub const MIN_HEIGHT_FRACTION: f64 = 0.02;

/// Separator between items of a block's meta line.
const META_SEPARATOR: &str = " • ";

/// Number of emotion tags shown on a mood block.
const MAX_EMOTIONS_SHOWN: usize = 2;

/// Vertical position of a block, as fractions of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockPlacement {
    pub top: f64,
    pub height: f64,
}

impl BlockPlacement {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether a day offset falls on this block.
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// Computes where an entry's block sits.
pub fn place(entry: &TimelineEntry) -> BlockPlacement {
    let minutes = entry.duration_minutes().unwrap_or(DEFAULT_BLOCK_MINUTES);
    BlockPlacement {
        top: minutes_to_offset(i64::from(entry.minute_of_day())),
        height: span_to_fraction(minutes).max(MIN_HEIGHT_FRACTION),
    }
}

/// Compact, category-specific block content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    /// Emoji or single-letter icon.
    pub glyph: String,
    pub title: String,
    /// Start time, then duration and intensity when present.
    pub meta: String,
    /// Secondary lines (emotions, severity, note).
    pub lines: Vec<String>,
}

/// Builds the summary shown inside an entry's block.
///
/// Returns `None` when the entry references data the renderer cannot
/// resolve: an activity missing from the catalog, or a symptom entry with no
/// symptoms. The block is still drawn, just without content.
pub fn summarize(
    entry: &TimelineEntry,
    catalog: &ActivityCatalog,
    locale: Locale,
) -> Option<BlockSummary> {
    let mut meta = vec![entry.clock_time().to_string()];
    if let Some(minutes) = entry.duration_minutes() {
        meta.push(format!("{minutes} min"));
    }
    let note = entry.payload.note().map(str::to_string);

    let (glyph, title, mut lines) = match &entry.payload {
        EntryPayload::Activity {
            activity_id,
            intensity,
            ..
        } => {
            let activity = catalog.get(activity_id)?;
            if let Some(intensity) = intensity {
                meta.push(intensity.to_string());
            }
            (activity.glyph(), activity.name.clone(), Vec::new())
        }
        EntryPayload::Mood {
            level, emotions, ..
        } => {
            let shown: Vec<&str> = emotions
                .iter()
                .take(MAX_EMOTIONS_SHOWN)
                .map(|e| locale.emotion(*e))
                .collect();
            let lines = if shown.is_empty() {
                Vec::new()
            } else {
                vec![shown.join(", ")]
            };
            (
                EntryCategory::Mood.icon().to_string(),
                locale.mood_heading(level),
                lines,
            )
        }
        EntryPayload::Symptom { symptoms, .. } => {
            let title = match symptoms.as_slice() {
                [] => return None,
                [only] => locale.symptom(only.kind).to_string(),
                many => locale.symptom_count(many.len()),
            };
            let top = symptoms.iter().map(|s| s.severity).max()?;
            (
                EntryCategory::Symptom.icon().to_string(),
                title,
                vec![locale.severity(top)],
            )
        }
    };

    lines.extend(note);
    Some(BlockSummary {
        glyph,
        title,
        meta: meta.join(META_SEPARATOR),
        lines,
    })
}

/// A positioned block ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryBlock<'a> {
    #[serde(skip)]
    pub entry: &'a TimelineEntry,
    pub id: EntryId,
    pub category: EntryCategory,
    #[serde(flatten)]
    pub placement: BlockPlacement,
    /// `None` leaves the content area blank.
    pub summary: Option<BlockSummary>,
}

/// Places and summarizes one entry.
pub fn render<'a>(
    entry: &'a TimelineEntry,
    catalog: &ActivityCatalog,
    locale: Locale,
) -> EntryBlock<'a> {
    let summary = summarize(entry, catalog, locale);
    if summary.is_none() {
        tracing::warn!(entry_id = %entry.id, category = %entry.category(), "entry content could not be summarized");
    }
    EntryBlock {
        entry,
        id: entry.id.clone(),
        category: entry.category(),
        placement: place(entry),
        summary,
    }
}
