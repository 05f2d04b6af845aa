//! Property tests for the UTF-8 aware text primitives, over arbitrary
//! well-formed Unicode strings rather than the fixed examples already
//! covered inline in `src/text/mod.rs`.

use proptest::prelude::*;

use deen::text::{count_sequences, crop_to_unicode_len, uppercase_in_place};

/// ASCII letters plus the German accented letters the crate folds,
/// covering both the plain-ASCII and two-byte-sequence code paths.
fn german_ish_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'c', 'h', 'g', 's', 'A', 'B', 'H', ' ', 'ä', 'ö', 'ü', 'ß', 'ï', 'ë',
        ]),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn uppercase_in_place_never_changes_code_point_count(s in german_ish_strategy()) {
        let before = count_sequences(s.as_bytes()).unwrap();
        let mut buf = s.into_bytes();
        uppercase_in_place(&mut buf);
        let after = count_sequences(&buf).unwrap();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn uppercase_in_place_is_idempotent(s in german_ish_strategy()) {
        let mut once = s.into_bytes();
        uppercase_in_place(&mut once);
        let mut twice = once.clone();
        uppercase_in_place(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn crop_to_unicode_len_never_exceeds_requested_count(s in german_ish_strategy(), n in 0usize..20) {
        let mut buf = s.into_bytes();
        let total = count_sequences(&buf).unwrap();
        let got = crop_to_unicode_len(&mut buf, n).unwrap();
        prop_assert_eq!(got, n.min(total));
        prop_assert_eq!(count_sequences(&buf).unwrap(), got);
    }
}
