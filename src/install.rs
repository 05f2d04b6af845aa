//! Install/remove orchestration: validates a DING file, copies it under the
//! install root, and builds the prefix index in one transaction.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeenError, DingFormatCheck, Result};
use crate::index::{run_indexing, IndexOutcome, IndexThresholds, PrefixStore};

/// Minimum file size, in bytes, for [`check_for_ding_format`] to consider a
/// file worth inspecting at all.
const MIN_DING_SIZE: u64 = 4096;

/// How many leading bytes of a candidate DING file are inspected for a
/// valid, non-comment `::` line.
const FORMAT_PROBE_BYTES: usize = 4096;

/// Progress states delivered through an install's `progress_cb`, matching
/// the state machine in §6: `Idle -> Starting -> Indexing(repeated, with
/// 0.0..1.0 progress) -> Completed`, or `-> Error` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Idle,
    Starting,
    Indexing,
    Completed,
    Error,
}

pub type ProgressCallback<'a> = &'a mut dyn FnMut(ProgressState, f64);
pub type CancelCallback<'a> = &'a mut dyn FnMut() -> bool;

/// Outcome of a successful (i.e. not erroring) install run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Completed,
    Cancelled,
}

/// Name of the installed exact-byte-copy of the DING source file.
const DICT_FILE_NAME: &str = "dict.txt";
/// Name of the installed SQLite prefix store.
const INDEX_FILE_NAME: &str = "index.db";

pub fn installed_dict_path(root_dir: &Path) -> PathBuf {
    root_dir.join(DICT_FILE_NAME)
}

pub fn installed_index_path(root_dir: &Path) -> PathBuf {
    root_dir.join(INDEX_FILE_NAME)
}

/// Presence of the installed data file under `root_dir`.
pub fn is_installed(root_dir: &Path) -> bool {
    installed_dict_path(root_dir).is_file()
}

/// Deletes both installed files under `root_dir`, if present. Used both by
/// an explicit uninstall and by install's own cleanup on cancellation or
/// error, so a partial install never leaves data behind.
pub fn remove_installed(root_dir: &Path) -> Result<()> {
    for path in [installed_dict_path(root_dir), installed_index_path(root_dir)] {
        if path.exists() {
            fs::remove_file(&path).map_err(|e| DeenError::io(&path, e))?;
        }
    }
    Ok(())
}

/// Validates that `path` looks like usable DING data without installing
/// anything: rejects `.gz` files outright, files under 4 KiB, and files
/// with no non-comment `::` line in their first 4 KiB.
pub fn check_for_ding_format(path: &Path) -> Result<DingFormatCheck> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        return Ok(DingFormatCheck::IsCompressed);
    }

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => return Ok(DingFormatCheck::IoProblem),
    };
    if metadata.len() < MIN_DING_SIZE {
        return Ok(DingFormatCheck::TooSmall);
    }

    let Ok(contents) = fs::read(path) else {
        return Ok(DingFormatCheck::IoProblem);
    };
    let probe = &contents[..contents.len().min(FORMAT_PROBE_BYTES)];
    let probe_text = String::from_utf8_lossy(probe);

    let has_data_line = probe_text.lines().any(|line| {
        let trimmed = line.trim_start();
        !trimmed.is_empty() && !trimmed.starts_with('#') && line.contains("::")
    });

    if has_data_line {
        Ok(DingFormatCheck::Ok)
    } else {
        Ok(DingFormatCheck::BadFormat)
    }
}

/// Validates, copies, and indexes `ding_path` under `root_dir`. On success,
/// `dict.txt` and `index.db` exist under `root_dir`; on cancellation or any
/// error, neither file is left behind.
pub fn install_from_path(
    root_dir: &Path,
    ding_path: &Path,
    mut progress_cb: impl FnMut(ProgressState, f64),
    mut cancel_cb: impl FnMut() -> bool,
) -> Result<InstallOutcome> {
    progress_cb(ProgressState::Starting, 0.0);

    let format = check_for_ding_format(ding_path)?;
    if format != DingFormatCheck::Ok {
        progress_cb(ProgressState::Error, 0.0);
        return Err(DeenError::Format(format));
    }

    let result = run_install(root_dir, ding_path, &mut progress_cb, &mut cancel_cb);

    match &result {
        Ok(InstallOutcome::Completed) => progress_cb(ProgressState::Completed, 1.0),
        Ok(InstallOutcome::Cancelled) => {
            let _ = remove_installed(root_dir);
            progress_cb(ProgressState::Idle, 0.0);
        }
        Err(_) => {
            let _ = remove_installed(root_dir);
            progress_cb(ProgressState::Error, 0.0);
        }
    }

    result
}

fn run_install(
    root_dir: &Path,
    ding_path: &Path,
    progress_cb: ProgressCallback<'_>,
    cancel_cb: CancelCallback<'_>,
) -> Result<InstallOutcome> {
    fs::create_dir_all(root_dir).map_err(|e| DeenError::io(root_dir, e))?;

    let dict_path = installed_dict_path(root_dir);
    fs::copy(ding_path, &dict_path).map_err(|e| DeenError::io(&dict_path, e))?;

    let index_path = installed_index_path(root_dir);
    let mut store = PrefixStore::create(&index_path)?;
    let writer = store.begin()?;

    let outcome = run_indexing(
        &dict_path,
        &writer,
        IndexThresholds::default(),
        move |p| progress_cb(ProgressState::Indexing, p),
        cancel_cb,
    )?;

    match outcome {
        IndexOutcome::Completed => {
            writer.commit()?;
            Ok(InstallOutcome::Completed)
        }
        IndexOutcome::Cancelled => {
            writer.rollback()?;
            Ok(InstallOutcome::Cancelled)
        }
    }
}
