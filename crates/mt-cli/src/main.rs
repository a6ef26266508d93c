use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mt_cli::commands::{add, delete, edit, layers, replay, show, stats};
use mt_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Show(args) => show::run(&mut out, args, &config)?,
        Commands::Layers(args) => layers::run(&mut out, args, &config)?,
        Commands::Stats(args) => stats::run(&mut out, args, &config)?,
        Commands::Replay(args) => replay::run(&mut out, args, &config)?,
        Commands::Add(args) => add::run(&mut out, args, &config)?,
        Commands::Edit(args) => edit::run(&mut out, args, &config)?,
        Commands::Delete(args) => delete::run(&mut out, args, &config)?,
    }

    out.flush()?;
    Ok(())
}
