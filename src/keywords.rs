//! The query keyword set: a prefix-free, length-ordered collection of
//! normalized tokens, plus the umlaut-recovery rewrite used to retry a
//! failed lookup.

use crate::common_words::is_common_word;
use crate::text::words::iter_words_in_buffer;
use crate::text::{case_insensitive_find, count_sequences, uppercase_in_place};

/// An ordered set of uppercase keywords with two invariants:
///
/// 1. no member is a byte-wise prefix of any earlier member;
/// 2. members are sorted by descending Unicode character count, ties
///    broken by ascending lexicographic byte order.
///
/// The length ordering is load-bearing: [`crate::scoring`] assumes the
/// longest keyword comes first so that a long, specific keyword claims a
/// match position before a short one gets the chance to.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    members: Vec<Vec<u8>>,
}

/// True iff `shorter` is a byte-wise prefix of (or equal to) `longer`.
fn is_byte_prefix(shorter: &[u8], longer: &[u8]) -> bool {
    longer.len() >= shorter.len() && &longer[..shorter.len()] == shorter
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uppercases, tokenizes, and folds `input` into the set, maintaining
    /// both invariants. Tokens that are common words, or that are already
    /// covered by (a prefix of) a longer keyword already present, are
    /// dropped; tokens that make an existing shorter keyword redundant
    /// evict that keyword in favor of the new, longer one.
    pub fn add_from_string(&mut self, input: &str) {
        let mut buf = input.as_bytes().to_vec();
        uppercase_in_place(&mut buf);
        let spans: Vec<_> = iter_words_in_buffer(&buf).collect();

        for span in spans {
            let token = buf[span.start..span.start + span.len].to_vec();
            if token.is_empty() || is_common_word(&token) {
                continue;
            }
            if self.members.iter().any(|m| is_byte_prefix(&token, m)) {
                // Token is a prefix of (or duplicate of) a keyword we
                // already keep; the longer member already covers it.
                continue;
            }
            self.members.retain(|m| !is_byte_prefix(m, &token));
            self.members.push(token);
        }

        self.resort();
    }

    fn resort(&mut self) {
        self.members.sort_by(|a, b| {
            let len_a = count_sequences(a).unwrap_or(a.len());
            let len_b = count_sequences(b).unwrap_or(b.len());
            len_b.cmp(&len_a).then_with(|| a.cmp(b))
        });
    }

    /// Umlaut recovery: rewrites the upper-ASCII digraphs `AE OE UE IE EE
    /// SS` in every keyword to the corresponding German letter
    /// (`Ä Ö Ü Ï Ë ß`). Every substitution is exactly two bytes in, two
    /// bytes out, so it happens in place without reallocating.
    ///
    /// Returns true if any substitution happened anywhere in the set; the
    /// caller uses that to decide whether a retry pass is worth running.
    /// All keywords are scanned unconditionally — this mirrors the
    /// original's non-short-circuiting `|` accumulation rather than a
    /// short-circuiting `||`, since `substitute_digraphs` always has to run
    /// to mutate its keyword regardless of what prior keywords did.
    pub fn adjust(&mut self) -> bool {
        let mut adjusted = false;
        for member in &mut self.members {
            let subst = substitute_digraphs(member);
            adjusted = adjusted | subst;
        }
        if adjusted {
            self.resort();
        }
        adjusted
    }

    /// Longest byte length among members (0 if empty), used to size
    /// scoring buffers.
    pub fn longest_keyword(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// True iff every keyword occurs somewhere in `text`, case-insensitively.
    /// Vacuously true for an empty set.
    pub fn all_present(&self, text: &[u8]) -> bool {
        self.members
            .iter()
            .all(|kw| case_insensitive_find(text, 0, text.len(), kw).is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Keywords in their current (length-descending) order.
    pub fn members(&self) -> impl Iterator<Item = &[u8]> {
        self.members.iter().map(Vec::as_slice)
    }
}

const DIGRAPHS: &[(&[u8; 2], u8)] = &[
    (b"AE", 0x84), // Ä
    (b"OE", 0x96), // Ö
    (b"UE", 0x9C), // Ü
    (b"IE", 0x8F), // Ï
    (b"EE", 0x8B), // Ë
    (b"SS", 0x9F), // ß
];

fn substitute_digraphs(buf: &mut [u8]) -> bool {
    let mut found = false;
    let mut i = 0;
    while i + 1 < buf.len() {
        let pair = [buf[i], buf[i + 1]];
        if let Some((_, second)) = DIGRAPHS.iter().find(|(needle, _)| **needle == pair) {
            buf[i] = 0xC3;
            buf[i + 1] = *second;
            found = true;
            i += 2;
        } else {
            i += 1;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_as_strings(set: &KeywordSet) -> Vec<String> {
        set.members()
            .map(|m| String::from_utf8(m.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn longest_keyword_is_zero_for_an_empty_set() {
        let set = KeywordSet::new();
        assert_eq!(set.longest_keyword(), 0);
    }

    #[test]
    fn longest_keyword_tracks_the_longest_member_byte_length() {
        let mut set = KeywordSet::new();
        set.add_from_string("apfel apfelbaum banane");
        assert_eq!(set.longest_keyword(), "APFELBAUM".len());
    }

    #[test]
    fn drops_common_words() {
        let mut set = KeywordSet::new();
        set.add_from_string("der Garten");
        assert_eq!(words_as_strings(&set), vec!["GARTEN"]);
    }

    #[test]
    fn orders_by_descending_length_then_lexicographic() {
        let mut set = KeywordSet::new();
        set.add_from_string("apfel apfelbaum banane");
        // APFELBAUM (9) first, then the two 6-char words lexicographically.
        assert_eq!(
            words_as_strings(&set),
            vec!["APFELBAUM", "APFEL", "BANANE"]
        );
    }

    #[test]
    fn prefix_of_existing_keyword_is_dropped() {
        let mut set = KeywordSet::new();
        set.add_from_string("apfelbaum");
        set.add_from_string("apfel");
        assert_eq!(words_as_strings(&set), vec!["APFELBAUM"]);
    }

    #[test]
    fn new_longer_keyword_evicts_existing_prefix() {
        let mut set = KeywordSet::new();
        set.add_from_string("apfel");
        set.add_from_string("apfelbaum");
        assert_eq!(words_as_strings(&set), vec!["APFELBAUM"]);
    }

    #[test]
    fn no_member_is_a_prefix_of_another() {
        let mut set = KeywordSet::new();
        set.add_from_string("haus hausfrau gartenhaus garten");
        let members: Vec<_> = set.members().map(|m| m.to_vec()).collect();
        for (i, a) in members.iter().enumerate() {
            for (j, b) in members.iter().enumerate() {
                if i != j {
                    assert!(!is_byte_prefix(a, b), "{:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn adjust_rewrites_digraphs_to_umlauts() {
        let mut set = KeywordSet::new();
        set.add_from_string("strasse");
        assert!(set.adjust());
        assert_eq!(words_as_strings(&set), vec!["STRAßE"]);
    }

    #[test]
    fn adjust_is_idempotent() {
        let mut set = KeywordSet::new();
        set.add_from_string("strasse");
        set.adjust();
        let once = words_as_strings(&set);
        let changed_again = set.adjust();
        assert!(!changed_again);
        assert_eq!(words_as_strings(&set), once);
    }

    #[test]
    fn all_present_is_vacuously_true_for_empty_set() {
        let set = KeywordSet::new();
        assert!(set.all_present(b"anything"));
    }

    #[test]
    fn all_present_requires_every_keyword() {
        let mut set = KeywordSet::new();
        set.add_from_string("haus garten");
        assert!(set.all_present(b"Haus :: house | Garten :: garden"));
        assert!(!set.all_present(b"Haus :: house"));
    }
}
