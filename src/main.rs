mod cli;
mod clipboard;
mod copier;
mod fs;
mod navigator;
mod selector;
mod tree;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    // Handle daemon mode first. This should stay in main.rs as it's an early exit.
    if clipboard::check_and_run_daemon_if_requested()? {
        return Ok(());
    }

    let cli_args = cli::Cli::parse();
    run_treeyank(cli_args)
}

fn run_treeyank(cli_args: cli::Cli) -> Result<()> {
    if cli_args.root != Path::new(".") {
        std::env::set_current_dir(&cli_args.root)
            .with_context(|| format!("cannot change into {}", cli_args.root.display()))?;
    }

    let fs = fs::OsFs::new(cli_args.include_ignored);
    let app = tui::App::new(&fs).context("could not read the working directory")?;

    match tui::run(app, &fs)? {
        Some(app) => {
            let mut sink = clipboard::SystemClipboard;
            let stats = copier::copy_selection(&fs, &mut sink, app.tree(), app.selector())?;
            println!(
                "✅ Copied {} files (≈ {} tokens) to the clipboard.",
                stats.files, stats.tokens
            );
        }
        None => println!("Selection cancelled. Clipboard not affected."),
    }

    Ok(())
}
