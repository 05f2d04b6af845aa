//! Edit-distance-flavored ranking: scores how well a candidate entry
//! matches a keyword set, smaller is better.
//!
//! The numeric weights below (positional penalty, side penalty, miss
//! penalty, no-match sentinel) aren't given explicit values in the
//! distilled spec; these are the resolved defaults from `SPEC_FULL.md`
//! §10, chosen to preserve ranking order on the documented scenarios
//! (German-side matches beat English-side matches beat misses).

use crate::entry::Entry;
use crate::keywords::KeywordSet;
use crate::text::case_insensitive_find;

/// Added to the positional penalty when a keyword is found on the English
/// side instead of the German side. Keeps every German-side match strictly
/// better than every English-side match at the same offset.
pub const ENGLISH_SIDE_PENALTY: u32 = 1;

/// Added per keyword that isn't found on either side.
pub const MISS_PENALTY: u32 = 1_000;

/// Returned when at least one keyword never matched; guaranteed to be
/// greater than any score a full match could accumulate.
pub const NO_MATCH_DISTANCE: u32 = u32::MAX;

/// Position penalty for a keyword found at byte `offset` within a side of
/// length `side_len`: the offset from the start plus the leftover bytes
/// after the match, i.e. `side_len - keyword_len`. Earlier matches in a
/// shorter, tighter side score lower than the same keyword buried in a
/// longer compound or sentence, which is what makes an exact match like
/// `Apfel :: apple` outrank a substring match like `Apfelbaum :: apple
/// tree` for the query `apfel`.
#[inline]
fn positional_penalty(side_len: usize, offset: usize, keyword_len: usize) -> u32 {
    let trailing = side_len - offset - keyword_len;
    (offset + trailing) as u32
}

/// Scores `entry` against `keywords` (assumed already sorted
/// longest-first), filling `use_map` with which keywords were matched.
///
/// `use_map` must have the same length as `keywords`; longer keywords are
/// scored first so a short keyword can't claim a match position a longer,
/// more specific keyword needed.
pub fn calculate_distance_from_keywords(
    entry: &Entry,
    keywords: &KeywordSet,
    use_map: &mut [bool],
) -> u32 {
    debug_assert_eq!(use_map.len(), keywords.len());
    for slot in use_map.iter_mut() {
        *slot = false;
    }

    let german = entry.german.as_bytes();
    let english = entry.english.as_bytes();
    let mut score: u32 = 0;

    for (i, keyword) in keywords.members().enumerate() {
        if let Some(offset) = case_insensitive_find(german, 0, german.len(), keyword) {
            use_map[i] = true;
            score = score.saturating_add(positional_penalty(german.len(), offset, keyword.len()));
            continue;
        }
        if let Some(offset) = case_insensitive_find(english, 0, english.len(), keyword) {
            use_map[i] = true;
            let penalty = positional_penalty(english.len(), offset, keyword.len())
                .saturating_add(ENGLISH_SIDE_PENALTY);
            score = score.saturating_add(penalty);
            continue;
        }
        score = score.saturating_add(MISS_PENALTY);
    }

    if use_map.iter().any(|&used| !used) {
        NO_MATCH_DISTANCE
    } else {
        score
    }
}

/// Convenience wrapper over [`calculate_distance_from_keywords`] that
/// allocates its own use-map; prefer the explicit form in hot loops where
/// the buffer can be reused across candidates.
pub fn distance(entry: &Entry, keywords: &KeywordSet) -> u32 {
    let mut use_map = vec![false; keywords.len()];
    calculate_distance_from_keywords(entry, keywords, &mut use_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords_from(s: &str) -> KeywordSet {
        let mut k = KeywordSet::new();
        k.add_from_string(s);
        k
    }

    #[test]
    fn exact_match_scores_lower_than_substring_match() {
        let keywords = keywords_from("apfel");
        let exact = Entry::new("Apfel", "apple");
        let substring = Entry::new("Apfelbaum", "apple tree");
        assert!(distance(&exact, &keywords) < distance(&substring, &keywords));
    }

    #[test]
    fn german_side_beats_english_side_at_same_offset() {
        let keywords = keywords_from("haus");
        let german_match = Entry::new("Haus", "building");
        let english_match = Entry::new("Gebaeude", "haus");
        assert!(distance(&german_match, &keywords) < distance(&english_match, &keywords));
    }

    #[test]
    fn missing_keyword_is_no_match() {
        let keywords = keywords_from("haus garten");
        let entry = Entry::new("Haus", "house");
        assert_eq!(distance(&entry, &keywords), NO_MATCH_DISTANCE);
    }

    #[test]
    fn all_keywords_present_is_a_real_score() {
        let keywords = keywords_from("haus garten");
        let entry = Entry::new("Haus und Garten", "house and garden");
        assert!(distance(&entry, &keywords) < NO_MATCH_DISTANCE);
    }

    #[test]
    fn longer_keyword_claims_match_before_shorter_one() {
        // "APFELBAUM" (longer) is tried before "APFEL" would be if both
        // existed; here we check that a longer, more specific keyword
        // set still resolves to a real (non-missing) score against a line
        // that contains the compound word.
        let keywords = keywords_from("apfelbaum");
        let entry = Entry::new("Apfelbaum", "apple tree");
        assert!(distance(&entry, &keywords) < NO_MATCH_DISTANCE);
    }
}
