//! CLI subcommand implementations.

pub mod add;
pub mod delete;
pub mod edit;
pub mod layers;
pub mod replay;
pub mod show;
pub mod stats;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use mt_core::TimelineEntry;

use crate::{Config, store};

/// The local calendar day, used when `--date` is omitted.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads the entry file and keeps the entries shown on `date`.
fn load_day(config: &Config, date: NaiveDate) -> Result<Vec<TimelineEntry>> {
    let entries = store::load(&config.entries_path)?;
    let day = store::entries_on(&entries, date);
    tracing::debug!(%date, total = entries.len(), shown = day.len(), "loaded day");
    Ok(day)
}
