//! Replay command: drives the timeline with a recorded pointer script.
//!
//! Each non-blank line of the script is one JSON pointer event, e.g.
//! `{"event":"down","y":570}`. The command prints what the host would do in
//! response: open the logging dialog, possibly with a duration, or open an
//! existing entry for editing.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;

use mt_core::{
    ActivityCatalog, ClockTime, EntryCategory, EntryId, PointerEvent, Timeline, TimelineEntry,
    TimelineHost, TimelineView,
};

use crate::Config;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON Lines file of pointer events.
    pub file: PathBuf,

    /// Day the timeline shows (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Hide a category for this run. Repeatable.
    #[arg(long, value_name = "CATEGORY")]
    pub hide: Vec<EntryCategory>,

    /// Output the actions as JSON.
    #[arg(long)]
    pub json: bool,
}

/// What the host does in response to a timeline callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    /// Open the logging dialog at a point in time.
    Log { at: NaiveDateTime },
    /// Open the logging dialog with the duration pre-filled.
    LogRange {
        start: NaiveDateTime,
        duration_minutes: u32,
    },
    /// Open an existing entry for editing.
    Edit {
        entry_id: EntryId,
        category: EntryCategory,
    },
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log { at } => write!(f, "log entry at {}", at.format("%Y-%m-%d %H:%M")),
            Self::LogRange {
                start,
                duration_minutes,
            } => write!(
                f,
                "log entry at {} for {duration_minutes} min",
                start.format("%Y-%m-%d %H:%M")
            ),
            Self::Edit { entry_id, category } => write!(f, "edit {category} entry {entry_id}"),
        }
    }
}

/// Host stand-in that records the dialogs it would open.
#[derive(Debug)]
struct DialogHost {
    date: NaiveDate,
    actions: Vec<HostAction>,
}

impl TimelineHost for DialogHost {
    fn on_time_slot_click(&mut self, at: ClockTime) {
        self.actions.push(HostAction::Log {
            at: self.date.and_time(at.to_naive_time()),
        });
    }

    fn on_time_slot_drag(&mut self, start: ClockTime, duration_minutes: u32) {
        self.actions.push(HostAction::LogRange {
            start: self.date.and_time(start.to_naive_time()),
            duration_minutes,
        });
    }

    fn on_entry_click(&mut self, entry: &TimelineEntry) {
        self.actions.push(HostAction::Edit {
            entry_id: entry.id.clone(),
            category: entry.category(),
        });
    }
}

fn read_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).with_context(|| {
                format!("{}:{}: invalid pointer event", path.display(), index + 1)
            })
        })
        .collect()
}

/// Feeds `events` through a fresh timeline and returns the host's actions.
pub fn replay(
    events: &[PointerEvent],
    view: &TimelineView<'_>,
    config: &Config,
    date: NaiveDate,
) -> Vec<HostAction> {
    let mut timeline = Timeline::new(config.geometry());
    let mut host = DialogHost {
        date,
        actions: Vec::new(),
    };
    for event in events {
        tracing::trace!(?event, "replaying pointer event");
        timeline.handle(*event, view, &mut host);
    }
    if timeline.controller().is_dragging() {
        tracing::debug!("script ended mid-drag; selection dropped");
    }
    host.actions
}

pub fn run<W: Write>(writer: &mut W, args: &ReplayArgs, config: &Config) -> Result<()> {
    let events = read_script(&args.file)?;
    let date = args.date.unwrap_or_else(super::today);
    let entries = super::load_day(config, date)?;
    let layers = config.layers(&args.hide);
    let catalog = ActivityCatalog::builtin();
    let view = TimelineView::build(&entries, &layers, &catalog, config.locale);

    let actions = replay(&events, &view, config, date);
    tracing::debug!(events = events.len(), actions = actions.len(), "replay finished");

    if args.json {
        serde_json::to_writer_pretty(&mut *writer, &actions)?;
        writeln!(writer)?;
        return Ok(());
    }

    if actions.is_empty() {
        writeln!(writer, "no action")?;
    }
    for action in &actions {
        writeln!(writer, "{action}")?;
    }
    Ok(())
}
