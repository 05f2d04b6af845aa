//! Shared test fixtures for the top-level test suites.

#![allow(dead_code)]

use std::io::Write;

use deen::{install_from_path, InstallOutcome};

/// Installs `lines` (already-valid DING-format content) under a fresh temp
/// root, padding the source file past the minimum install size with
/// harmless comment lines first.
pub fn install_fixture(lines: &str) -> (tempfile::TempDir, tempfile::NamedTempFile) {
    let mut source = tempfile::NamedTempFile::new().unwrap();
    let padding = "# padding to exceed the minimum dictionary size\n".repeat(100);
    write!(source, "{padding}{lines}").unwrap();
    source.flush().unwrap();

    let root = tempfile::tempdir().unwrap();
    let outcome = install_from_path(root.path(), source.path(), |_, _| {}, || false).unwrap();
    assert_eq!(outcome, InstallOutcome::Completed);

    (root, source)
}
