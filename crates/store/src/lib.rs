//! In-process reference implementation of the ledgerq storage seam
//!
//! Production deployments bring their own [`ledgerq_core::Ledger`] over
//! whatever ordered store hosts them; this crate provides the ordered
//! in-memory ledger the tests and examples run against.

pub mod memory;

pub use memory::MemoryLedger;
