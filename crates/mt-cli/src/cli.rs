//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::delete::DeleteArgs;
use crate::commands::edit::EditArgs;
use crate::commands::layers::LayersArgs;
use crate::commands::replay::ReplayArgs;
use crate::commands::show::ShowArgs;
use crate::commands::stats::StatsArgs;

/// Mood tracker day timeline.
///
/// Shows a day's activities, moods and symptoms on a 24-hour grid and turns
/// clicks and drags on that grid into new entries.
#[derive(Debug, Parser)]
#[command(name = "mt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a day's timeline.
    Show(ShowArgs),

    /// Show the layer panel.
    Layers(LayersArgs),

    /// Count a day's entries per category.
    Stats(StatsArgs),

    /// Feed a pointer script through the timeline and print what happens.
    Replay(ReplayArgs),

    /// Log a new entry.
    Add(AddArgs),

    /// Replace an existing entry, keeping its ID.
    Edit(EditArgs),

    /// Remove an entry.
    Delete(DeleteArgs),
}
