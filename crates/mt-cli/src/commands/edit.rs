//! Edit command: the logging dialog reopened on an existing entry.
//!
//! The entry is rebuilt from the same flags `add` takes and written back in
//! place, keeping its ID and position in the file. Without `--date` it stays
//! on its current day.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;

use crate::{Config, store};

use super::add::{NewEntry, build_entry};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry ID, as printed by `show` or `add`.
    pub id: String,

    #[command(subcommand)]
    pub entry: NewEntry,
}

pub fn run<W: Write>(writer: &mut W, args: &EditArgs, config: &Config) -> Result<()> {
    let id = args.id.trim().trim_start_matches('#');
    let mut file = store::load_file(&config.entries_path)?;
    let Some(slot) = file.entries.iter_mut().find(|entry| entry.id.as_str() == id) else {
        bail!("entry not found: {id}");
    };

    let updated = build_entry(slot.id.clone(), &args.entry, slot.timestamp.date())?;
    let previous = std::mem::replace(slot, updated.clone());
    store::save_file(&config.entries_path, &file)?;
    tracing::debug!(
        entry_id = %updated.id,
        from = %previous.category(),
        to = %updated.category(),
        "entry updated"
    );

    writeln!(
        writer,
        "Updated {} entry {} at {}",
        updated.category(),
        updated.id,
        updated.timestamp.format("%Y-%m-%d %H:%M")
    )?;
    Ok(())
}
