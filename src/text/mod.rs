//! UTF-8 aware text primitives: sequence classification, case folding with
//! German accented letters, US-ASCII transliteration, and case-insensitive
//! search over raw bytes.
//!
//! Every routine here operates on raw bytes rather than `&str` on purpose:
//! the indexer and lookup engine both work with file-offset-addressed byte
//! ranges read straight off disk, and re-validating them as `str` on every
//! pass would be wasted work once the DING file has already been accepted
//! by [`crate::check_for_ding_format`].

pub mod words;

use unicode_normalization::UnicodeNormalization;

use crate::error::{DeenError, Result};

/// Sentinel returned by [`case_insensitive_find`]'s C-flavored twin, kept
/// only for parity with the spec's vocabulary; prefer matching on the
/// `Option` the function actually returns.
pub const NOT_FOUND: usize = usize::MAX;

/// Length in bytes of the UTF-8 sequence starting at `buf[offset]`.
///
/// Follows RFC 3629: a leading byte's high bits determine the sequence
/// length (1-4 bytes); anything that can't be a leading byte is
/// [`DeenError::BadSequence`], and a leading byte with too few trailing
/// bytes remaining in `buf` is [`DeenError::IncompleteSequence`].
pub fn sequence_len_at(buf: &[u8], offset: usize) -> Result<usize> {
    let b = buf[offset];
    let len = if b & 0x80 == 0 {
        1
    } else if b & 0xE0 == 0xC0 {
        2
    } else if b & 0xF0 == 0xE0 {
        3
    } else if b & 0xF8 == 0xF0 {
        4
    } else {
        return Err(DeenError::BadSequence { offset });
    };
    if offset + len > buf.len() {
        return Err(DeenError::IncompleteSequence { offset });
    }
    for i in 1..len {
        if buf[offset + i] & 0xC0 != 0x80 {
            return Err(DeenError::BadSequence { offset });
        }
    }
    Ok(len)
}

/// Counts the Unicode code points (sequences) in `buf`.
pub fn count_sequences(buf: &[u8]) -> Result<usize> {
    let mut offset = 0;
    let mut count = 0;
    while offset < buf.len() {
        offset += sequence_len_at(buf, offset)?;
        count += 1;
    }
    Ok(count)
}

/// Uppercases `buf` in place. ASCII `a-z` becomes `A-Z`; the recognized
/// German two-byte letters `ä ö ü ï ë` map to their uppercase counterparts
/// `Ä Ö Ü Ï Ë`. `ß` is left unchanged: its uppercase form is a later Unicode
/// addition and DING data uses `ß` in both cases. Every substitution here is
/// length-preserving, so the buffer never needs to grow or shrink.
pub fn uppercase_in_place(buf: &mut [u8]) {
    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if b.is_ascii_lowercase() {
            buf[i] = b.to_ascii_uppercase();
            i += 1;
            continue;
        }
        if b == 0xC3 && i + 1 < buf.len() {
            if let Some(upper_second) = lower_to_upper_second_byte(buf[i + 1]) {
                buf[i + 1] = upper_second;
                i += 2;
                continue;
            }
        }
        i += sequence_len_at(buf, i).unwrap_or(1);
    }
}

/// Second byte of a two-byte (`0xC3 ..`) lowercase German letter mapped to
/// its uppercase counterpart. `ß` (`0x9F`) intentionally has no entry.
fn lower_to_upper_second_byte(second: u8) -> Option<u8> {
    match second {
        0xA4 => Some(0x84), // ä -> Ä
        0xB6 => Some(0x96), // ö -> Ö
        0xBC => Some(0x9C), // ü -> Ü
        0xAF => Some(0x8F), // ï -> Ï
        0xAB => Some(0x8B), // ë -> Ë
        _ => None,
    }
}

/// German letters whose conventional ASCII transliteration isn't their bare
/// NFD base letter (`ä` decomposes to `a`, but the dictionary convention is
/// `ae`, not `a`). Checked before falling back to decomposition.
fn german_digraph_equivalent(seq: &[u8]) -> Option<&'static str> {
    match seq {
        [0xC3, 0x84] | [0xC3, 0xA4] => Some("ae"), // Ä / ä
        [0xC3, 0x96] | [0xC3, 0xB6] => Some("oe"), // Ö / ö
        [0xC3, 0x9C] | [0xC3, 0xBC] => Some("ue"), // Ü / ü
        [0xC3, 0x8F] | [0xC3, 0xAF] => Some("ie"), // Ï / ï
        [0xC3, 0x8B] | [0xC3, 0xAB] => Some("ee"), // Ë / ë
        [0xC3, 0x9F] => Some("ss"),                // ß
        _ => None,
    }
}

/// True for code points in the Unicode "Combining Diacritical Marks" block,
/// which is what NFD decomposition scatters a base letter's accents into.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Canonical US-ASCII transliteration for a single UTF-8 sequence, or `None`
/// if the sequence has no sensible ASCII equivalent.
///
/// The German umlauts and `ß` use the fixed digraph table above; any other
/// precomposed Latin letter the dictionary happens to contain (accented
/// loanwords like `café` or `naïve` sneak into DING data too) falls back to
/// stripping its NFD-decomposed combining marks, e.g. `é` -> `e`, `ç` -> `c`.
pub fn ascii_equivalent(seq: &[u8]) -> Option<String> {
    if let Some(digraph) = german_digraph_equivalent(seq) {
        return Some(digraph.to_string());
    }

    let s = std::str::from_utf8(seq).ok()?;
    let mut chars = s.chars();
    let ch = chars.next()?;
    if chars.next().is_some() || ch.is_ascii() {
        return None;
    }

    let decomposed: String = ch.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if !decomposed.is_empty() && decomposed.is_ascii() {
        Some(decomposed)
    } else {
        None
    }
}

/// True iff every byte in `buf` has its high bit clear.
pub fn is_ascii_clean(buf: &[u8]) -> bool {
    buf.iter().all(|b| b & 0x80 == 0)
}

/// Truncates `buf` in place to at most `n` Unicode code points, returning
/// the resulting code-point count (`min(n, total_chars)`).
pub fn crop_to_unicode_len(buf: &mut Vec<u8>, n: usize) -> Result<usize> {
    let mut offset = 0;
    let mut count = 0;
    while count < n && offset < buf.len() {
        offset += sequence_len_at(buf, offset)?;
        count += 1;
    }
    buf.truncate(offset);
    Ok(count)
}

/// Case-insensitive search for `needle` (already uppercase) within
/// `s[from..to)`. Compares byte-by-byte after uppercasing each byte of `s`,
/// matching the spec's ASCII-centric definition; `needle` may itself contain
/// multi-byte UTF-8 as raw bytes, which are compared verbatim since only
/// ASCII bytes are case-folded here.
pub fn case_insensitive_find(s: &[u8], from: usize, to: usize, needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || to > s.len() || from > to {
        return None;
    }
    let window = to.checked_sub(needle.len())?;
    for start in from..=window {
        if s[start..start + needle.len()]
            .iter()
            .zip(needle.iter())
            .all(|(&a, &b)| a.to_ascii_uppercase() == b)
        {
            return Some(start);
        }
    }
    None
}
