//! Error taxonomy for the indexing-and-lookup engine.
//!
//! The spec distinguishes input-format errors, I/O errors, store errors,
//! encoding errors, and cancellation. They're kept as one enum (rather than
//! one-per-module) because install and lookup both need to match on all of
//! them at their single outermost boundary.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeenError>;

/// Outcome of [`crate::check_for_ding_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DingFormatCheck {
    Ok,
    IsCompressed,
    IoProblem,
    TooSmall,
    BadFormat,
}

#[derive(Debug, Error)]
pub enum DeenError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    BadSequence { offset: usize },

    #[error("incomplete UTF-8 sequence at byte offset {offset}")]
    IncompleteSequence { offset: usize },

    #[error("DING format check failed: {0:?}")]
    Format(DingFormatCheck),

    #[error("install was cancelled")]
    Cancelled,

    #[error("dictionary is not installed under {0}")]
    NotInstalled(PathBuf),
}

impl DeenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeenError::Io {
            path: path.into(),
            source,
        }
    }
}
