//! Core types for the ledgerq document queue
//!
//! This crate defines the foundational pieces shared by every layer:
//! - Scalar: dynamic context value (null, bool, int, float, string)
//! - Context: flat field-name -> Scalar mapping attached to a record
//! - Record: one queue element (creation time + context) and its blob codec
//! - Entry: a (key, record) pair as returned by scans and queries
//! - key: derivation of order-preserving keys from creation time
//! - Ledger: the storage trait the engine is layered on
//! - Error: error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod record;
pub mod traits;
pub mod value;

pub use error::{Error, Result};
pub use key::{key_for_now, timed_key};
pub use record::{Entry, Record};
pub use traits::{Ledger, ScanIter};
pub use value::{Context, Scalar};
