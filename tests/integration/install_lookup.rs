//! Round-trips a small multi-entry DING file through install and lookup,
//! exercising the whole pipeline rather than any single module in isolation.

use deen::{lookup, EngineConfig};

use crate::common::install_fixture;

#[test]
fn installed_dictionary_answers_multiple_queries() {
    let (root, _source) = install_fixture(
        "Haus :: house\nGarten :: garden\nApfel :: apple\nApfelbaum :: apple tree\n",
    );

    let config = EngineConfig::default();

    let haus = lookup(root.path(), "haus", &config).unwrap();
    assert_eq!(haus.len(), 1);
    assert_eq!(haus[0].entry.english, "house");

    let garten = lookup(root.path(), "garten", &config).unwrap();
    assert_eq!(garten.len(), 1);
    assert_eq!(garten[0].entry.german, "Garten");

    let nothing = lookup(root.path(), "automobil", &config).unwrap();
    assert!(nothing.is_empty());
}

#[test]
fn reinstalling_replaces_the_previous_dictionary() {
    let (root, _first) = install_fixture("Haus :: house\n");
    assert_eq!(
        lookup(root.path(), "haus", &EngineConfig::default())
            .unwrap()
            .len(),
        1
    );

    let (_second_root, second_source) = install_fixture("Garten :: garden\n");
    deen::install_from_path(root.path(), second_source.path(), |_, _| {}, || false).unwrap();

    assert!(lookup(root.path(), "haus", &EngineConfig::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        lookup(root.path(), "garten", &EngineConfig::default())
            .unwrap()
            .len(),
        1
    );
}
