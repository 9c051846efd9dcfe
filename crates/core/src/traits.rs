//! The storage seam the queue engine is layered on
//!
//! The ledger is an external collaborator: an ordered key-value store
//! offering nothing beyond point get/put/delete and a lexicographic range
//! scan. No secondary indexes, no typed schema, no reverse scan. All
//! ordering, typed comparison and queue semantics are synthesized above
//! this trait, so swapping the backing store never touches the engine.

use crate::error::Result;

/// Lazy scan cursor: `(key, blob)` pairs in byte-lexicographic key order
///
/// Finite and not restartable mid-scan; callers consume it at most once.
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<(String, Vec<u8>)>> + 'a>;

/// Ordered key-value store consumed by the queue engine
///
/// Implementations must keep keys in byte-lexicographic order; everything
/// the engine guarantees rests on that single property.
pub trait Ledger {
    /// Point read; `None` when the key is absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Durable write; overwrites silently when the key exists
    fn put(&self, key: &str, blob: &[u8]) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn delete(&self, key: &str) -> Result<()>;

    /// Range scan over `[from, to)` in key order
    ///
    /// `to` itself is excluded. An empty `from` starts at the first key;
    /// an empty `to` means no upper bound. A reversed interval
    /// (`to < from`) yields an empty scan - bound normalization is the
    /// engine's job, not the store's.
    fn scan(&self, from: &str, to: &str) -> Result<ScanIter<'_>>;
}
