//! Exercises the uninstall path end to end.

use deen::{is_installed, lookup, remove_installed, DeenError, EngineConfig};

use crate::common::install_fixture;

#[test]
fn remove_installed_clears_both_files_and_lookup_then_errors() {
    let (root, _source) = install_fixture("Haus :: house\n");
    assert!(is_installed(root.path()));

    remove_installed(root.path()).unwrap();
    assert!(!is_installed(root.path()));

    let result = lookup(root.path(), "haus", &EngineConfig::default());
    assert!(matches!(result, Err(DeenError::NotInstalled(_))));
}

#[test]
fn remove_installed_on_an_empty_root_is_not_an_error() {
    let root = tempfile::tempdir().unwrap();
    remove_installed(root.path()).unwrap();
}
