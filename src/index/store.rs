//! The prefix store: a many-to-many `(prefix, ref)` relation persisted in
//! SQLite.
//!
//! The spec allows "any embedded relational engine with ordered keys and
//! transactions"; SQLite (via `rusqlite`) is the natural choice here since
//! none of the corpus's teacher candidates embeds one directly. Two tables
//! back the relation: `prefixes(prefix_id, prefix_bytes UNIQUE)` and
//! `refs(prefix_id, ref)` with a composite uniqueness constraint, exactly
//! as specified in §4.5.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS prefixes (
    prefix_id INTEGER PRIMARY KEY,
    prefix_bytes BLOB NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS refs (
    prefix_id INTEGER NOT NULL REFERENCES prefixes(prefix_id),
    ref_offset INTEGER NOT NULL,
    UNIQUE(prefix_id, ref_offset)
);
CREATE INDEX IF NOT EXISTS idx_refs_prefix ON refs(prefix_id);
";

/// The disk-backed prefix index. Opened read-write exclusively during
/// install, read-only for queries.
pub struct PrefixStore {
    conn: Connection,
}

impl PrefixStore {
    /// Creates a fresh store at `path`, truncating any existing one. Used
    /// at install time, which rebuilds the index from scratch.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            std::fs::remove_file(path).map_err(|e| crate::error::DeenError::io(path, e))?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(PrefixStore { conn })
    }

    /// Opens an existing store read-only, for queries.
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        )?;
        Ok(PrefixStore { conn })
    }

    /// Begins the single transaction that an entire install runs inside.
    pub fn begin(&mut self) -> Result<PrefixWriter<'_>> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        Ok(PrefixWriter { tx })
    }

    /// Returns the set of refs that appear for every given prefix
    /// (intersection). An empty `prefixes` slice returns an empty set
    /// rather than "everything", since there is nothing to intersect.
    pub fn refs_for_keyword_prefixes(&self, prefixes: &[Vec<u8>]) -> Result<Vec<u64>> {
        if prefixes.is_empty() {
            return Ok(Vec::new());
        }

        let mut sets: Vec<HashSet<u64>> = Vec::with_capacity(prefixes.len());
        for prefix in prefixes {
            let prefix_id: Option<i64> = self
                .conn
                .query_row(
                    "SELECT prefix_id FROM prefixes WHERE prefix_bytes = ?1",
                    params![prefix],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(prefix_id) = prefix_id else {
                // This prefix has no refs at all; the intersection is empty.
                return Ok(Vec::new());
            };
            let mut stmt = self
                .conn
                .prepare("SELECT ref_offset FROM refs WHERE prefix_id = ?1")?;
            let refs: HashSet<u64> = stmt
                .query_map(params![prefix_id], |row| {
                    let v: i64 = row.get(0)?;
                    Ok(v as u64)
                })?
                .collect::<std::result::Result<_, _>>()?;
            sets.push(refs);
        }

        let mut iter = sets.into_iter();
        let first = iter.next().unwrap_or_default();
        let intersection = iter.fold(first, |acc, set| acc.intersection(&set).copied().collect());
        let mut result: Vec<u64> = intersection.into_iter().collect();
        result.sort_unstable();
        Ok(result)
    }
}

/// A write handle bound to the single transaction an install runs inside.
pub struct PrefixWriter<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl<'conn> PrefixWriter<'conn> {
    /// Ensures every prefix in `prefixes` exists, then inserts one
    /// `(prefix_id, ref)` row per prefix. `prefixes` is assumed already
    /// deduplicated by the caller (the indexer's per-ref bag); duplicates
    /// across calls are filtered by the table's uniqueness constraint.
    pub fn add(&self, ref_offset: u64, prefixes: &[Vec<u8>]) -> Result<()> {
        for prefix in prefixes {
            self.tx.execute(
                "INSERT INTO prefixes (prefix_bytes) VALUES (?1)
                 ON CONFLICT(prefix_bytes) DO NOTHING",
                params![prefix],
            )?;
            let prefix_id: i64 = self.tx.query_row(
                "SELECT prefix_id FROM prefixes WHERE prefix_bytes = ?1",
                params![prefix],
                |row| row.get(0),
            )?;
            self.tx.execute(
                "INSERT INTO refs (prefix_id, ref_offset) VALUES (?1, ?2)
                 ON CONFLICT(prefix_id, ref_offset) DO NOTHING",
                params![prefix_id, ref_offset as i64],
            )?;
        }
        Ok(())
    }

    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }

    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        Ok(())
    }
}
