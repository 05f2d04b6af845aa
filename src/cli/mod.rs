//! CLI definitions for the `deen` command-line interface.
//!
//! Three subcommands: `install` builds the dictionary under a root
//! directory, `lookup` queries it, and `check` validates a candidate DING
//! file without installing anything. A `remove` subcommand mirrors install
//! for symmetry. Terminal rendering (color, UTF-8 vs. ASCII downgrade) is
//! out of scope for the engine this crate implements; `main.rs` keeps that
//! surface intentionally thin.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deen", about = "German-English DING dictionary", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and install a DING dictionary file under a root directory
    Install {
        /// Path to the DING-format source file
        ding: PathBuf,

        /// Root directory to install dict.txt and index.db under
        #[arg(short, long)]
        root: PathBuf,
    },

    /// Query an installed dictionary
    Lookup {
        /// Root directory the dictionary was installed under
        #[arg(short, long)]
        root: PathBuf,

        /// Query words
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Check whether a file looks like valid DING data, without installing it
    Check {
        /// Path to the candidate DING file
        ding: PathBuf,
    },

    /// Remove an installed dictionary
    Remove {
        /// Root directory to remove dict.txt and index.db from
        #[arg(short, long)]
        root: PathBuf,
    },
}
