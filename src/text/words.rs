//! Word tokenization: a pure in-memory splitter for short strings (queries,
//! keyword sets) and a streaming splitter for the multi-megabyte DING file
//! the indexer has to walk exactly once.
//!
//! The streaming iterator replaces the teacher's callback-plus-context
//! pattern (and the original spec's own callback-driven design) with a pull
//! iterator: the driver calls `.next()`, checks its own cancellation flag
//! between items, and reports progress from the yielded [`FileWord`] itself.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{DeenError, Result};

/// Bytes treated as separators between words: ASCII whitespace, other C0
/// control bytes, and DEL. Matches the spec's "non-whitespace, non-control"
/// definition of a word.
#[inline]
fn is_separator(b: u8) -> bool {
    b <= b' ' || b == 0x7F
}

/// A maximal run of non-separator bytes within an in-memory buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub len: usize,
}

/// Iterates over the maximal non-whitespace runs in `buf`, in order.
pub fn iter_words_in_buffer(buf: &[u8]) -> impl Iterator<Item = WordSpan> + '_ {
    let mut pos = 0usize;
    std::iter::from_fn(move || {
        while pos < buf.len() && is_separator(buf[pos]) {
            pos += 1;
        }
        if pos >= buf.len() {
            return None;
        }
        let start = pos;
        while pos < buf.len() && !is_separator(buf[pos]) {
            pos += 1;
        }
        Some(WordSpan {
            start,
            len: pos - start,
        })
    })
}

/// One word found while streaming a DING file.
#[derive(Debug, Clone)]
pub struct FileWord {
    /// The word's raw bytes.
    pub bytes: Vec<u8>,
    /// Byte offset of the first character of the line containing this word
    /// (the offset immediately following the most recent newline).
    pub line_ref: u64,
    /// `bytes_consumed / file_size`, for progress reporting.
    pub progress: f64,
}

/// Size of each read performed while streaming the dictionary file. Words
/// that straddle a block boundary are re-buffered so they're always
/// delivered whole.
const BLOCK_SIZE: usize = 64 * 1024;

/// Streams words out of a file without ever holding more than a couple of
/// blocks in memory, tracking the running "ref" (start-of-line offset) as it
/// crosses newlines.
pub struct FileWordIterator {
    reader: BufReader<File>,
    buf: Vec<u8>,
    pos: usize,
    buf_offset: u64,
    current_ref: u64,
    file_size: u64,
    eof: bool,
}

impl FileWordIterator {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| DeenError::io(path, e))?;
        let file_size = file.metadata().map_err(|e| DeenError::io(path, e))?.len();
        Ok(FileWordIterator {
            reader: BufReader::new(file),
            buf: Vec::with_capacity(BLOCK_SIZE * 2),
            pos: 0,
            buf_offset: 0,
            current_ref: 0,
            file_size,
            eof: false,
        })
    }

    fn fill_more(&mut self) -> std::io::Result<()> {
        if self.pos > 0 {
            self.buf.drain(0..self.pos);
            self.buf_offset += self.pos as u64;
            self.pos = 0;
        }
        if self.eof {
            return Ok(());
        }
        let mut chunk = vec![0u8; BLOCK_SIZE];
        let n = self.reader.read(&mut chunk)?;
        if n == 0 {
            self.eof = true;
        } else {
            self.buf.extend_from_slice(&chunk[..n]);
        }
        Ok(())
    }
}

impl Iterator for FileWordIterator {
    type Item = std::io::Result<FileWord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Skip separators, tracking newlines as we go.
            while self.pos < self.buf.len() && is_separator(self.buf[self.pos]) {
                if self.buf[self.pos] == b'\n' {
                    self.current_ref = self.buf_offset + self.pos as u64 + 1;
                }
                self.pos += 1;
            }
            if self.pos >= self.buf.len() {
                if self.eof {
                    return None;
                }
                if let Err(e) = self.fill_more() {
                    return Some(Err(e));
                }
                continue;
            }

            let start = self.pos;
            let mut end = start;
            while end < self.buf.len() && !is_separator(self.buf[end]) {
                end += 1;
            }
            if end == self.buf.len() && !self.eof {
                // Word may continue past this block; pull more without
                // losing our place.
                if let Err(e) = self.fill_more() {
                    return Some(Err(e));
                }
                continue;
            }

            let word = self.buf[start..end].to_vec();
            let consumed = self.buf_offset + end as u64;
            let progress = if self.file_size == 0 {
                1.0
            } else {
                (consumed as f64 / self.file_size as f64).min(1.0)
            };
            let line_ref = self.current_ref;
            self.pos = end;
            return Some(Ok(FileWord {
                bytes: word,
                line_ref,
                progress,
            }));
        }
    }
}

/// Reads the line starting at `offset` from `path`, stopping at the next
/// `\n` (exclusive) or end of file. Used by the lookup engine to fetch the
/// original DING line for a candidate ref.
pub fn read_line_at(path: &Path, offset: u64) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| DeenError::io(path, e))?;
    file.seek(SeekFrom::Start(offset))
        .map_err(|e| DeenError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        let n = reader.read(&mut byte).map_err(|e| DeenError::io(path, e))?;
        if n == 0 || byte[0] == b'\n' {
            break;
        }
        line.push(byte[0]);
    }
    Ok(line)
}
