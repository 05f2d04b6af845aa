//! Streams a DING file once and emits `(ref, prefix)` pairs into the
//! prefix store under a single transaction.
//!
//! Re-expressed from the original callback-plus-context-pointer design as a
//! driver loop over a pull iterator ([`FileWordIterator`]): the driver polls
//! cancellation and reports progress itself, between items, rather than a
//! tokenizer invoking opaque callbacks mid-scan.

use std::path::Path;

use crate::common_words::is_common_word;
use crate::error::Result;
use crate::index::store::PrefixWriter;
use crate::text::words::FileWordIterator;
use crate::text::{count_sequences, crop_to_unicode_len, uppercase_in_place};

/// Indexing depth `D` and minimum `M` from §3/§4.4. Grouped so the CLI and
/// library share one source of truth, mirroring the teacher's
/// `IndexThresholds`.
#[derive(Debug, Clone, Copy)]
pub struct IndexThresholds {
    /// Maximum prefix length in Unicode code points.
    pub depth: usize,
    /// Minimum token length, in code points, to be indexed at all.
    pub minimum: usize,
}

impl Default for IndexThresholds {
    fn default() -> Self {
        IndexThresholds {
            depth: 3,
            minimum: 3,
        }
    }
}

/// Result of a single streaming indexing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Completed,
    Cancelled,
}

/// Streams `ding_path` once, inserting every non-common token's prefix bag
/// into `writer` per line. `progress_cb` is invoked whenever the integer
/// percentage complete advances; `cancel_cb` is polled on every word and,
/// if it returns true, indexing stops immediately and returns
/// [`IndexOutcome::Cancelled`] without writing the current (partial) bag.
pub fn run_indexing(
    ding_path: &Path,
    writer: &PrefixWriter<'_>,
    thresholds: IndexThresholds,
    mut progress_cb: impl FnMut(f64),
    mut cancel_cb: impl FnMut() -> bool,
) -> Result<IndexOutcome> {
    let words = FileWordIterator::open(ding_path)?;

    let mut bag: Vec<Vec<u8>> = Vec::new();
    let mut current_ref: Option<u64> = None;
    let mut last_percent: i32 = -1;
    let mut scratch: Vec<u8> = Vec::new();
    // True for the whole run of words belonging to a `#`-comment line (§6:
    // "Lines beginning with `#` ... are comments and ignored"); decided from
    // that line's first word and held until the ref changes again. Empty
    // lines need no such guard: the tokenizer never yields a word for them.
    let mut is_comment_line = false;

    for word in words {
        let word = word.map_err(|e| crate::error::DeenError::io(ding_path, e))?;

        if cancel_cb() {
            return Ok(IndexOutcome::Cancelled);
        }

        if current_ref != Some(word.line_ref) {
            flush(writer, &mut current_ref, &mut bag)?;
            current_ref = Some(word.line_ref);
            is_comment_line = word.bytes.first() == Some(&b'#');
        }

        if !is_comment_line {
            scratch.clear();
            scratch.extend_from_slice(&word.bytes);
            uppercase_in_place(&mut scratch);

            if !is_common_word(&scratch) {
                let code_len = count_sequences(&scratch)?;
                if code_len >= thresholds.minimum {
                    let mut prefix = scratch.clone();
                    crop_to_unicode_len(&mut prefix, thresholds.depth)?;
                    if let Err(pos) = bag.binary_search(&prefix) {
                        bag.insert(pos, prefix);
                    }
                }
            }
        }

        let percent = (word.progress * 100.0).floor() as i32;
        if percent != last_percent {
            last_percent = percent;
            progress_cb(word.progress);
        }
    }

    flush(writer, &mut current_ref, &mut bag)?;
    Ok(IndexOutcome::Completed)
}

fn flush(
    writer: &PrefixWriter<'_>,
    current_ref: &mut Option<u64>,
    bag: &mut Vec<Vec<u8>>,
) -> Result<()> {
    if let Some(r) = current_ref.take() {
        if !bag.is_empty() {
            writer.add(r, bag)?;
        }
    }
    bag.clear();
    Ok(())
}
