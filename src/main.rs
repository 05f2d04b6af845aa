//! `deen` CLI: install, look up, and check DING dictionaries.
//!
//! ```bash
//! # Validate a candidate source file
//! deen check ./deu-eng.txt
//!
//! # Build the index under a root directory
//! deen install ./deu-eng.txt --root ~/.local/share/deen
//!
//! # Query it
//! deen lookup --root ~/.local/share/deen "haus"
//! ```

mod cli;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, Commands};
use deen::{
    check_for_ding_format, install_from_path, lookup, remove_installed, DingFormatCheck,
    EngineConfig, ProgressState,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install { ding, root } => run_install(&ding, &root),
        Commands::Lookup { root, query, limit } => run_lookup(&root, &query, limit),
        Commands::Check { ding } => run_check(&ding),
        Commands::Remove { root } => remove_installed(&root).map_err(|e| e.to_string()),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run_install(ding: &std::path::Path, root: &std::path::Path) -> Result<(), String> {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:40.cyan/dim}] {pos}% {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcome = install_from_path(
        root,
        ding,
        |state, progress| match state {
            ProgressState::Starting => bar.set_message("starting"),
            ProgressState::Indexing => {
                bar.set_position((progress * 100.0) as u64);
                bar.set_message("indexing");
            }
            ProgressState::Completed => bar.finish_with_message("done"),
            ProgressState::Error => bar.abandon_with_message("failed"),
            ProgressState::Idle => {}
        },
        || false,
    )
    .map_err(|e| e.to_string())?;

    println!("{:?}", outcome);
    Ok(())
}

fn run_lookup(root: &std::path::Path, query: &str, limit: usize) -> Result<(), String> {
    let mut config = EngineConfig::default();
    config.max_results = limit;

    let results = lookup(root, query, &config).map_err(|e| e.to_string())?;
    if results.is_empty() {
        println!("no matches for \"{query}\"");
        return Ok(());
    }
    for ranked in results {
        println!("{}\t(distance {})", ranked.entry, ranked.distance);
    }
    Ok(())
}

fn run_check(ding: &std::path::Path) -> Result<(), String> {
    let check = check_for_ding_format(ding).map_err(|e| e.to_string())?;
    match check {
        DingFormatCheck::Ok => {
            println!("ok");
            Ok(())
        }
        other => Err(format!("{other:?}")),
    }
}
