//! The common-word set: short German/English articles, pronouns,
//! conjunctions and auxiliaries excluded from both indexing and query
//! keywords.
//!
//! Built once via `once_cell`, the way `evertedsphere-suzuri` keeps its
//! static lookup tables lazy rather than re-allocating them per call.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Upper-case common words in both languages. Intentionally small and
/// fixed at compile time, per the spec ("compile-time-fixed set").
const COMMON_WORDS: &[&str] = &[
    // German
    "DER", "DIE", "DAS", "DEM", "DEN", "DES", "EIN", "EINE", "EINEN", "EINEM", "EINER", "EINES",
    "UND", "ODER", "ABER", "ICH", "DU", "ER", "SIE", "ES", "WIR", "IHR", "MIR", "DIR", "IHM",
    "IHN", "UNS", "EUCH", "IHNEN", "IST", "SIND", "WAR", "WAREN", "HAT", "HABEN", "HATTE",
    "WIRD", "WERDEN", "NICHT", "AUCH", "SO", "ZU", "ZUM", "ZUR", "AN", "AUF", "IN", "IM", "MIT",
    "VON", "VOM", "BEI", "AUS", "NACH", "ALS", "WIE", "WENN", "DASS", "OB",
    // English
    "THE", "A", "AN", "AND", "OR", "BUT", "I", "YOU", "HE", "SHE", "IT", "WE", "THEY", "ME",
    "HIM", "HER", "US", "THEM", "IS", "ARE", "WAS", "WERE", "HAS", "HAVE", "HAD", "WILL",
    "WOULD", "NOT", "TO", "OF", "IN", "ON", "AT", "WITH", "FROM", "BY", "AS", "THAT", "THIS",
    "BE", "BEEN", "FOR", "IF",
];

static COMMON_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_WORDS.iter().copied().collect());

/// True iff `word` (assumed already uppercase, given as raw bytes from a
/// larger buffer) is an exact match for a common word.
pub fn is_common_word(word: &[u8]) -> bool {
    match std::str::from_utf8(word) {
        Ok(s) => COMMON_WORD_SET.contains(s),
        Err(_) => false,
    }
}
