//! Range resolution over the ledger
//!
//! Resolves a half-open key interval into an ordered sequence of decoded
//! records. Bound normalization happens here, once, so every caller gets
//! the same semantics: an empty upper bound defaults to "now", a reversed
//! interval is swapped rather than rejected, and the upper bound is always
//! excluded.

use ledgerq_core::{key_for_now, Entry, Ledger, Record, Result};

/// Scan `[from, to)` and decode every stored record in key order
///
/// - empty `to` defaults to the key for the current instant
/// - if `to < from` the bounds are swapped (backward ranges supported)
/// - `to` itself is never part of the result
pub fn scan_range<L: Ledger>(ledger: &L, from: &str, to: &str) -> Result<Vec<Entry>> {
    let now_key;
    let (mut from, mut to) = (from, to);

    if to.is_empty() {
        now_key = key_for_now();
        to = now_key.as_str();
    }
    if to < from {
        std::mem::swap(&mut from, &mut to);
    }

    let mut entries = Vec::new();
    for item in ledger.scan(from, to)? {
        let (key, blob) = item?;
        entries.push(Entry::new(key, Record::decode(&blob)?));
    }

    Ok(entries)
}
