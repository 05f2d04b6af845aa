//! A German-English dictionary built from plain-text DING data.
//!
//! This crate indexes a DING-format dictionary file into a disk-backed prefix
//! index and answers free-text queries by intersecting prefix hits, verifying
//! candidates against the original text, and ranking survivors by an
//! edit-distance-flavored score.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  text / keywords │──▶│  index (store) │──▶│   lookup     │
//! │ (tokenize, fold, │   │ (indexer, SQLite│   │ (intersect,  │
//! │  umlaut recover) │   │  prefix→ref map)│   │  verify, rank)│
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │                  entry + scoring (Levenshtein-ish distance)  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use deen::{install_from_path, lookup, EngineConfig};
//!
//! install_from_path(root, ding_path, |_state, _progress| {}, || false)?;
//! let hits = lookup(root, "haus", &EngineConfig::default())?;
//! ```

pub mod common_words;
pub mod entry;
pub mod error;
pub mod index;
pub mod install;
pub mod keywords;
pub mod lookup;
pub mod scoring;
pub mod text;

pub use entry::Entry;
pub use error::{DeenError, DingFormatCheck, Result};
pub use install::{
    check_for_ding_format, install_from_path, is_installed, remove_installed, CancelCallback,
    InstallOutcome, ProgressCallback, ProgressState,
};
pub use keywords::KeywordSet;
pub use lookup::{lookup, EngineConfig, RankedEntry};
