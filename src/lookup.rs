//! The lookup engine: resolves a keyword set to a ranked list of entries by
//! intersecting prefix hits, fetching the original lines, scoring them, and
//! retrying once with umlaut-recovered keywords if too few results came
//! back.

use std::path::Path;

use crate::entry::Entry;
use crate::error::{DeenError, Result};
use crate::index::{IndexThresholds, PrefixStore};
use crate::install::{installed_dict_path, installed_index_path, is_installed};
use crate::keywords::KeywordSet;
use crate::scoring::{calculate_distance_from_keywords, NO_MATCH_DISTANCE};
use crate::text::crop_to_unicode_len;
use crate::text::words::read_line_at;

/// Tunables shared by indexing and lookup: the prefix depth/minimum, the
/// result cap, and the threshold that decides whether the umlaut-recovery
/// retry is worth running.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub thresholds: IndexThresholds,
    pub max_results: usize,
    /// If fewer than this many results come back on the first pass, and
    /// `adjust()` rewrote at least one digraph, retry once with the
    /// adjusted keywords.
    pub retry_min_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            thresholds: IndexThresholds::default(),
            max_results: 20,
            retry_min_results: 20,
        }
    }
}

/// One scored, ranked dictionary entry.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub entry: Entry,
    pub ref_offset: u64,
    pub distance: u32,
}

/// Resolves `query` against the dictionary installed under `root_dir`,
/// returning up to `config.max_results` entries ranked by ascending
/// distance (ties broken by ref, for determinism).
pub fn lookup(root_dir: &Path, query: &str, config: &EngineConfig) -> Result<Vec<RankedEntry>> {
    if !is_installed(root_dir) {
        return Err(DeenError::NotInstalled(root_dir.to_path_buf()));
    }

    let mut keywords = KeywordSet::new();
    keywords.add_from_string(query);

    let store = PrefixStore::open_read_only(&installed_index_path(root_dir))?;
    let dict_path = installed_dict_path(root_dir);

    let mut results = search_once(&store, &dict_path, &keywords, config)?;

    if results.len() < config.retry_min_results && keywords.adjust() {
        results = search_once(&store, &dict_path, &keywords, config)?;
    }

    Ok(results)
}

/// Derives the search-prefix set for `keywords`: each keyword cropped to
/// `D` Unicode characters, deduplicated.
fn search_prefixes(keywords: &KeywordSet, depth: usize) -> Vec<Vec<u8>> {
    let mut prefixes: Vec<Vec<u8>> = Vec::new();
    for keyword in keywords.members() {
        let mut cropped = keyword.to_vec();
        let _ = crop_to_unicode_len(&mut cropped, depth);
        if !prefixes.contains(&cropped) {
            prefixes.push(cropped);
        }
    }
    prefixes
}

fn search_once(
    store: &PrefixStore,
    dict_path: &Path,
    keywords: &KeywordSet,
    config: &EngineConfig,
) -> Result<Vec<RankedEntry>> {
    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let prefixes = search_prefixes(keywords, config.thresholds.depth);
    let refs = store.refs_for_keyword_prefixes(&prefixes)?;

    let mut use_map = vec![false; keywords.len()];
    let mut scored: Vec<RankedEntry> = Vec::new();

    for ref_offset in refs {
        let line_bytes = read_line_at(dict_path, ref_offset)?;
        if !keywords.all_present(&line_bytes) {
            continue;
        }
        let Ok(line) = String::from_utf8(line_bytes) else {
            continue;
        };
        let Some(entry) = Entry::from_line(&line) else {
            continue;
        };

        let distance = calculate_distance_from_keywords(&entry, keywords, &mut use_map);
        if distance == NO_MATCH_DISTANCE {
            continue;
        }

        scored.push(RankedEntry {
            entry,
            ref_offset,
            distance,
        });
    }

    scored.sort_by(|a, b| a.distance.cmp(&b.distance).then(a.ref_offset.cmp(&b.ref_offset)));
    scored.truncate(config.max_results);
    Ok(scored)
}
