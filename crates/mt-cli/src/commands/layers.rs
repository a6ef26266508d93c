//! Layers command: the visibility panel.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use mt_core::EntryCategory;

use crate::Config;

#[derive(Debug, Args)]
pub struct LayersArgs {
    /// Hide a category for this run. Repeatable.
    #[arg(long, value_name = "CATEGORY")]
    pub hide: Vec<EntryCategory>,
}

pub fn run<W: Write>(writer: &mut W, args: &LayersArgs, config: &Config) -> Result<()> {
    let locale = config.locale;
    let layers = config.layers(&args.hide);

    writeln!(
        writer,
        "{} ({})",
        locale.layers_heading(),
        layers.summary(locale)
    )?;
    for layer in layers.iter() {
        let marker = if layer.visible { "[x]" } else { "[ ]" };
        writeln!(writer, "{marker} {} {}", layer.icon, layer.label)?;
    }
    if layers.all_hidden() {
        writeln!(writer, "{}", locale.no_visible_layers())?;
    }
    Ok(())
}
