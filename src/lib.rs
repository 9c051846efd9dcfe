//! ledgerq - a time-keyed document queue over an ordered key-value ledger
//!
//! ledgerq layers queue semantics (push/pop/front/back/swap) and an ad-hoc
//! query language (key range + equality filter + field sort) on top of a
//! store that offers nothing but point get/put/delete and a lexicographic
//! range scan. Keys are derived from creation time so that byte order of
//! keys equals chronological order of records.
//!
//! # Quick Start
//!
//! ```
//! use ledgerq::{LedgerQueue, MemoryLedger};
//!
//! let queue = LedgerQueue::new(MemoryLedger::new());
//!
//! queue.push_back(Some(r#"{"country":"PL"}"#))?;
//! let newest = queue.back()?.expect("just pushed");
//! assert_eq!(newest.record.context["country"], ledgerq::Scalar::from("PL"));
//!
//! let matches = queue.query("filter=country=PL")?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), ledgerq::Error>(())
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the storage seam:
//!
//! - `ledgerq-core` - value/record model, time-derived keys, the [`Ledger`]
//!   trait and the error taxonomy;
//! - `ledgerq-store` - [`MemoryLedger`], the in-process reference ledger;
//! - `ledgerq-engine` - range resolution, the query mini-language, filter
//!   and sort evaluators, and the [`LedgerQueue`] operation facade.
//!
//! Production deployments implement [`Ledger`] over their own ordered
//! store; everything above that trait is storage-agnostic.

pub use ledgerq_core::{
    key_for_now, timed_key, Context, Entry, Error, Ledger, Record, Result, Scalar, ScanIter,
};
pub use ledgerq_engine::{
    apply_filter, apply_sort, scan_range, Filter, LedgerQueue, Operation, Selector, Sort,
};
pub use ledgerq_store::MemoryLedger;
