//! Stats command: per-category counts for a day.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use mt_core::{DayCounts, EntryCategory};

use crate::Config;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Day to count (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

pub fn run<W: Write>(writer: &mut W, args: &StatsArgs, config: &Config) -> Result<()> {
    let locale = config.locale;
    let date = args.date.unwrap_or_else(super::today);
    let counts = DayCounts::tally(&super::load_day(config, date)?);

    writeln!(writer, "{} ({date})", locale.stats_heading())?;
    for category in EntryCategory::ALL {
        writeln!(
            writer,
            "{} {}: {}",
            category.icon(),
            locale.category(category),
            counts.get(category)
        )?;
    }
    writeln!(writer, "Total: {}", counts.total)?;
    Ok(())
}
