//! A single dictionary entry: a German side and an English side, split from
//! one DING line on the first `::`.

/// The three-byte side separator token, with surrounding whitespace
/// tolerated by [`Entry::from_line`].
const SEPARATOR: &str = "::";

/// One `(german, english)` pair parsed from a DING line. Either side may
/// contain sub-senses separated by ` | `; the core treats them as opaque
/// strings and leaves splitting them to callers (deferred per spec §9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub german: String,
    pub english: String,
}

impl Entry {
    pub fn new(german: impl Into<String>, english: impl Into<String>) -> Self {
        Entry {
            german: german.into(),
            english: english.into(),
        }
    }

    /// Splits `line` on the first occurrence of `::`, trimming whitespace
    /// from both sides. Returns `None` if the line has no separator, or if
    /// it's a comment (`#`-prefixed) or blank line per §6 — a defensive
    /// second check alongside the indexer's own comment-line guard, since a
    /// comment can itself contain `::` (e.g. `# see also: Hund :: dog`).
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let idx = line.find(SEPARATOR)?;
        let german = line[..idx].trim().to_string();
        let english = line[idx + SEPARATOR.len()..].trim().to_string();
        Some(Entry { german, english })
    }

    /// Splits a side into its `|`-delimited sub-senses, trimming each.
    pub fn senses(side: &str) -> Vec<&str> {
        side.split('|').map(str::trim).collect()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.german, self.english)
    }
}
