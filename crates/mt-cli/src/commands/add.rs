//! Add command: the logging dialog.
//!
//! Builds a finished entry from flags and appends it to the entry file. The
//! times printed by `replay` map directly onto `--date`/`--at`/`--duration`.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use mt_core::{
    ActivityCatalog, ActivityId, ClockTime, Emotion, EntryId, EntryPayload, Intensity, MoodLevel,
    Severity, SymptomKind, SymptomRecord, TimelineEntry,
};

use crate::{Config, store};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(subcommand)]
    pub entry: NewEntry,
}

/// When the new entry happens.
#[derive(Debug, Args)]
pub struct When {
    /// Day of the entry (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Start time (HH:MM).
    #[arg(long)]
    pub at: ClockTime,

    /// Length in minutes.
    #[arg(long)]
    pub duration: Option<u32>,

    /// Free-text note.
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum NewEntry {
    /// Log an activity from the catalog.
    Activity {
        #[command(flatten)]
        when: When,

        /// Catalog activity ID (e.g. act-ex-2).
        #[arg(long)]
        activity: String,

        /// Intensity from 1 to 5.
        #[arg(long)]
        intensity: Option<u8>,
    },

    /// Log a mood.
    Mood {
        #[command(flatten)]
        when: When,

        /// Mood level from 1 to 10.
        #[arg(long)]
        level: u8,

        /// Emotion tag (e.g. joy, anxiety). Repeatable.
        #[arg(long = "emotion", value_name = "EMOTION")]
        emotions: Vec<String>,
    },

    /// Log one or more symptoms.
    Symptom {
        #[command(flatten)]
        when: When,

        /// Symptom with severity 1-5 (e.g. headache:3). Repeatable.
        #[arg(long = "symptom", value_name = "KIND:SEVERITY", required = true)]
        symptoms: Vec<String>,
    },
}

/// Parses a snake_case tag (dashes accepted) into one of the core's enums.
fn parse_tag<T: DeserializeOwned>(value: &str, what: &str) -> Result<T> {
    let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .with_context(|| format!("unknown {what}: {value}"))
}

fn parse_symptom(value: &str) -> Result<SymptomRecord> {
    let Some((kind, severity)) = value.split_once(':') else {
        bail!("symptom must be KIND:SEVERITY, got {value}");
    };
    let severity: u8 = severity
        .trim()
        .parse()
        .with_context(|| format!("invalid severity in {value}"))?;
    Ok(SymptomRecord {
        kind: parse_tag::<SymptomKind>(kind, "symptom")?,
        severity: Severity::new(severity)?,
    })
}

fn build_payload(entry: &NewEntry, catalog: &ActivityCatalog) -> Result<EntryPayload> {
    let note = entry.when().note.clone();
    let payload = match entry {
        NewEntry::Activity {
            activity,
            intensity,
            ..
        } => {
            let activity_id = ActivityId::new(activity.as_str())?;
            if catalog.get(&activity_id).is_none() {
                bail!("unknown activity: {activity}");
            }
            EntryPayload::Activity {
                activity_id,
                intensity: intensity.map(Intensity::new).transpose()?,
                note,
            }
        }
        NewEntry::Mood {
            level, emotions, ..
        } => EntryPayload::Mood {
            level: MoodLevel::new(*level)?,
            emotions: emotions
                .iter()
                .map(|e| parse_tag::<Emotion>(e, "emotion"))
                .collect::<Result<_>>()?,
            note,
        },
        NewEntry::Symptom { symptoms, .. } => EntryPayload::Symptom {
            symptoms: symptoms
                .iter()
                .map(|s| parse_symptom(s))
                .collect::<Result<_>>()?,
            note,
        },
    };
    Ok(payload)
}

impl NewEntry {
    const fn when(&self) -> &When {
        match self {
            Self::Activity { when, .. } | Self::Mood { when, .. } | Self::Symptom { when, .. } => {
                when
            }
        }
    }
}

/// Builds the entry described by the flags under `id`.
///
/// `default_date` applies when `--date` is omitted.
pub(crate) fn build_entry(
    id: EntryId,
    entry: &NewEntry,
    default_date: NaiveDate,
) -> Result<TimelineEntry> {
    let when = entry.when();
    let payload = build_payload(entry, &ActivityCatalog::builtin())?;
    let date = when.date.unwrap_or(default_date);

    let mut built = TimelineEntry::new(id, date.and_time(when.at.to_naive_time()), payload);
    if let Some(minutes) = when.duration {
        built = built.with_duration(minutes)?;
    }
    Ok(built)
}

pub fn run<W: Write>(writer: &mut W, args: &AddArgs, config: &Config) -> Result<()> {
    let id = EntryId::new(Uuid::new_v4().to_string())?;
    let entry = build_entry(id, &args.entry, super::today())?;

    let mut file = store::load_file(&config.entries_path)?;
    file.entries.push(entry.clone());
    store::save_file(&config.entries_path, &file)?;
    tracing::debug!(entry_id = %entry.id, category = %entry.category(), "entry added");

    writeln!(
        writer,
        "Added {} entry {} at {}",
        entry.category(),
        entry.id,
        entry.timestamp.format("%Y-%m-%d %H:%M")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use mt_core::EntryCategory;

    fn config(path: &Path) -> Config {
        Config {
            entries_path: path.to_path_buf(),
            ..Config::default()
        }
    }

    fn when(at: &str, duration: Option<u32>) -> When {
        When {
            date: Some("2025-12-12".parse().unwrap()),
            at: at.parse().unwrap(),
            duration,
            note: None,
        }
    }

    fn add(config: &Config, entry: NewEntry) -> Result<String> {
        let mut output = Vec::new();
        run(&mut output, &AddArgs { entry }, config)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_activity_appends_entry() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp.path().join("entries.json"));

        let output = add(
            &config,
            NewEntry::Activity {
                when: when("09:30", Some(45)),
                activity: "act-ex-2".to_string(),
                intensity: Some(3),
            },
        )
        .unwrap();

        let entries = store::load(&config.entries_path).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.category(), EntryCategory::Activity);
        assert_eq!(entry.duration_minutes(), Some(45));
        assert_eq!(entry.clock_time().to_string(), "09:30");
        assert!(Uuid::parse_str(entry.id.as_str()).is_ok());
        assert_eq!(
            output,
            format!("Added activity entry {} at 2025-12-12 09:30\n", entry.id)
        );
    }

    #[test]
    fn add_mood_parses_emotions() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp.path().join("entries.json"));

        add(
            &config,
            NewEntry::Mood {
                when: when("14:00", None),
                level: 7,
                emotions: vec!["joy".to_string(), "Calm".to_string()],
            },
        )
        .unwrap();

        let entries = store::load(&config.entries_path).unwrap();
        let EntryPayload::Mood {
            level, emotions, ..
        } = &entries[0].payload
        else {
            panic!("expected mood");
        };
        assert_eq!(level.value(), 7);
        assert_eq!(emotions, &vec![Emotion::Joy, Emotion::Calm]);
        assert_eq!(entries[0].duration, None);
    }

    #[test]
    fn add_symptom_parses_kind_and_severity() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp.path().join("entries.json"));

        add(
            &config,
            NewEntry::Symptom {
                when: when("16:00", None),
                symptoms: vec!["headache:3".to_string(), "back-pain:2".to_string()],
            },
        )
        .unwrap();

        let entries = store::load(&config.entries_path).unwrap();
        let EntryPayload::Symptom { symptoms, .. } = &entries[0].payload else {
            panic!("expected symptom");
        };
        let kinds: Vec<SymptomKind> = symptoms.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SymptomKind::Headache, SymptomKind::BackPain]);
        assert_eq!(symptoms[0].severity.value(), 3);
    }

    #[test]
    fn add_rejects_bad_input_without_writing() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(&temp.path().join("entries.json"));

        let err = add(
            &config,
            NewEntry::Activity {
                when: when("09:00", None),
                activity: "act-nope".to_string(),
                intensity: None,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown activity"));

        let err = add(
            &config,
            NewEntry::Mood {
                when: when("09:00", None),
                level: 11,
                emotions: Vec::new(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("between 1 and 10"));

        let err = add(
            &config,
            NewEntry::Mood {
                when: when("09:00", Some(0)),
                level: 5,
                emotions: Vec::new(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 1 minute"));

        let err = add(
            &config,
            NewEntry::Symptom {
                when: when("09:00", None),
                symptoms: vec!["headache".to_string()],
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("KIND:SEVERITY"));

        assert!(!config.entries_path.exists());
    }
}
