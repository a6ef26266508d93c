//! Delete command for removing an entry by ID.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;

use crate::{Config, store};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry ID, as printed by `show` or `add`.
    pub id: String,
}

pub fn run<W: Write>(writer: &mut W, args: &DeleteArgs, config: &Config) -> Result<()> {
    let id = args.id.trim().trim_start_matches('#');
    let mut file = store::load_file(&config.entries_path)?;
    let Some(index) = file.entries.iter().position(|entry| entry.id.as_str() == id) else {
        bail!("entry not found: {id}");
    };

    let removed = file.entries.remove(index);
    store::save_file(&config.entries_path, &file)?;
    tracing::debug!(entry_id = %removed.id, "entry deleted");

    writeln!(writer, "Deleted {} entry {}", removed.category(), removed.id)?;
    Ok(())
}
