//! Prefix-based inverted index: a streaming indexer over a DING file and
//! the SQLite-backed relation it writes into.

pub mod indexer;
pub mod store;

pub use indexer::{run_indexing, IndexOutcome, IndexThresholds};
pub use store::{PrefixStore, PrefixWriter};
