//! Property tests for [`deen::KeywordSet`]'s two documented invariants:
//! prefix-freedom and descending-length ordering.

use proptest::prelude::*;

use deen::text::count_sequences;
use deen::KeywordSet;

fn is_byte_prefix(shorter: &[u8], longer: &[u8]) -> bool {
    longer.len() >= shorter.len() && &longer[..shorter.len()] == shorter
}

/// Short lowercase ASCII "words" separated by spaces, arbitrary in count
/// and content, fed through `add_from_string` as a single query string.
fn word_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::string::string_regex("[a-z]{1,12}").unwrap(), 0..12)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn no_member_is_ever_a_prefix_of_another(input in word_list_strategy()) {
        let mut set = KeywordSet::new();
        set.add_from_string(&input);
        let members: Vec<Vec<u8>> = set.members().map(|m| m.to_vec()).collect();

        for (i, a) in members.iter().enumerate() {
            for (j, b) in members.iter().enumerate() {
                if i != j {
                    prop_assert!(!is_byte_prefix(a, b));
                }
            }
        }
    }

    #[test]
    fn members_are_sorted_by_descending_character_count(input in word_list_strategy()) {
        let mut set = KeywordSet::new();
        set.add_from_string(&input);
        let lens: Vec<usize> = set
            .members()
            .map(|m| count_sequences(m).unwrap())
            .collect();

        for pair in lens.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn adjust_is_a_fixed_point_after_one_application(input in word_list_strategy()) {
        let mut set = KeywordSet::new();
        set.add_from_string(&input);
        set.adjust();
        let once: Vec<Vec<u8>> = set.members().map(|m| m.to_vec()).collect();
        set.adjust();
        let twice: Vec<Vec<u8>> = set.members().map(|m| m.to_vec()).collect();
        prop_assert_eq!(once, twice);
    }
}
