//! Show command: renders one day's timeline.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use mt_core::{ActivityCatalog, EntryBlock, EntryCategory, Layers, Locale, TimelineView};

use crate::Config;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Day to show (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Hide a category for this run. Repeatable.
    #[arg(long, value_name = "CATEGORY")]
    pub hide: Vec<EntryCategory>,

    /// Output the rendered view as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ShowJson<'a> {
    date: NaiveDate,
    layers: &'a Layers,
    #[serde(flatten)]
    view: &'a TimelineView<'a>,
}

pub fn run<W: Write>(writer: &mut W, args: &ShowArgs, config: &Config) -> Result<()> {
    let date = args.date.unwrap_or_else(super::today);
    let entries = super::load_day(config, date)?;
    let layers = config.layers(&args.hide);
    let catalog = ActivityCatalog::builtin();
    let view = TimelineView::build(&entries, &layers, &catalog, config.locale);
    tracing::debug!(%date, blocks = view.blocks.len(), "timeline built");

    if args.json {
        let output = ShowJson {
            date,
            layers: &layers,
            view: &view,
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        return Ok(());
    }

    render_text(writer, date, &view, &layers, config.locale)
}

fn render_text<W: Write>(
    writer: &mut W,
    date: NaiveDate,
    view: &TimelineView<'_>,
    layers: &Layers,
    locale: Locale,
) -> Result<()> {
    writeln!(writer, "{date} · {}", layers.summary(locale))?;

    if let Some(empty) = view.empty_state {
        let (title, hint) = empty.message(locale);
        writeln!(writer, "{title}")?;
        if let Some(hint) = hint {
            writeln!(writer, "{hint}")?;
        }
    }

    for hour in &view.hours {
        writeln!(writer, "{}", hour.label)?;
        let starting_here = view
            .blocks
            .iter()
            .filter(|block| u32::from(block.entry.clock_time().hour()) == hour.hour);
        for block in starting_here {
            write_block(writer, block)?;
        }
    }

    Ok(())
}

fn write_block<W: Write>(writer: &mut W, block: &EntryBlock<'_>) -> Result<()> {
    match &block.summary {
        Some(summary) => {
            writeln!(
                writer,
                "  {} {} ({}) #{}",
                summary.glyph, summary.title, summary.meta, block.id
            )?;
            for line in &summary.lines {
                writeln!(writer, "    {line}")?;
            }
        }
        None => writeln!(writer, "  ? {} #{}", block.category, block.id)?,
    }
    Ok(())
}
