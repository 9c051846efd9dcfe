//! MemoryLedger: ordered in-memory ledger
//!
//! `BTreeMap<String, Vec<u8>>` behind a `parking_lot::RwLock`. The map's
//! key order is byte-lexicographic, which is exactly the ordering the
//! `Ledger` contract requires, so scans are plain map ranges.
//!
//! # Design Notes
//!
//! - Scans snapshot the requested range under the read lock and yield the
//!   snapshot lazily; a scan never observes writes issued after it started.
//! - The lock makes the ledger shareable across threads, but the engine
//!   itself never runs concurrent operations; isolation across callers is
//!   the hosting transaction layer's concern.

use std::collections::BTreeMap;
use std::ops::Bound;

use parking_lot::RwLock;

use ledgerq_core::{Ledger, Result, ScanIter};

/// Ordered in-memory ledger backed by a `BTreeMap`
#[derive(Debug, Default)]
pub struct MemoryLedger {
    data: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, blob: &[u8]) -> Result<()> {
        self.data.write().insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn scan(&self, from: &str, to: &str) -> Result<ScanIter<'_>> {
        // reversed interval: empty scan per the Ledger contract
        if !to.is_empty() && to < from {
            return Ok(Box::new(std::iter::empty()));
        }

        let upper = if to.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(to)
        };

        let snapshot: Vec<(String, Vec<u8>)> = self
            .data
            .read()
            .range::<str, _>((Bound::Included(from), upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}
