//! Queue operations and query engine for ledgerq
//!
//! Everything here is synthesized from the narrow `Ledger` contract
//! (point get/put/delete plus one forward range scan):
//!
//! - [`scan_range`] resolves a half-open key interval into decoded records
//! - [`Operation`] parses the compact query mini-language
//! - [`apply_filter`] / [`apply_sort`] evaluate the dynamic-typed filter
//!   and sort directives over a scanned candidate set
//! - [`LedgerQueue`] is the operation facade: CRUD, range queries and the
//!   queue operations (push/front/back/pop/swap)
//!
//! No component caches or memoizes across calls; every operation re-reads
//! the store.

pub mod filter;
pub mod operation;
pub mod queue;
pub mod scan;
pub mod sort;

pub use filter::apply_filter;
pub use operation::{Filter, Operation, Selector, Sort};
pub use queue::LedgerQueue;
pub use scan::scan_range;
pub use sort::apply_sort;
