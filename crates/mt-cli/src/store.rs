//! JSON entry file.
//!
//! The file holds a single JSON array of entries. A missing file is an empty
//! day, not an error, and an element that does not parse as an entry is
//! skipped with a warning rather than failing the whole load.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use mt_core::TimelineEntry;

/// Parsed contents of the entry file.
///
/// Elements that do not parse as entries are kept verbatim in `unreadable`
/// so that rewriting the file never loses them.
#[derive(Debug, Default)]
pub struct EntryFile {
    pub entries: Vec<TimelineEntry>,
    pub unreadable: Vec<serde_json::Value>,
}

/// Reads the file, setting aside elements that are not valid entries.
pub fn load_file(path: &Path) -> Result<EntryFile> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "entry file missing, starting empty");
            return Ok(EntryFile::default());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    if content.trim().is_empty() {
        return Ok(EntryFile::default());
    }
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut file = EntryFile::default();
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<TimelineEntry>(value.clone()) {
            Ok(entry) => file.entries.push(entry),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "skipping unreadable entry"
                );
                file.unreadable.push(value);
            }
        }
    }
    Ok(file)
}

/// Reads every valid entry in the file.
pub fn load(path: &Path) -> Result<Vec<TimelineEntry>> {
    Ok(load_file(path)?.entries)
}

/// Overwrites the file, creating its directory if needed.
///
/// Unreadable elements are written back after the entries.
pub fn save_file(path: &Path, file: &EntryFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create entry directory")?;
    }
    let mut values = file
        .entries
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .context("failed to serialize entries")?;
    values.extend(file.unreadable.iter().cloned());

    let json = serde_json::to_string_pretty(&values).context("failed to serialize entries")?;
    fs::write(path, json + "\n").with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        count = file.entries.len(),
        kept_unreadable = file.unreadable.len(),
        "entries saved"
    );
    Ok(())
}

/// Overwrites the file with `entries`.
pub fn save(path: &Path, entries: &[TimelineEntry]) -> Result<()> {
    save_file(
        path,
        &EntryFile {
            entries: entries.to_vec(),
            unreadable: Vec::new(),
        },
    )
}

/// Entries shown on `date`, in file order.
pub fn entries_on(entries: &[TimelineEntry], date: NaiveDate) -> Vec<TimelineEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_on(date))
        .cloned()
        .collect()
}
