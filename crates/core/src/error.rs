//! Error types for ledgerq
//!
//! One taxonomy covers the whole system; every failing operation returns
//! one of these variants and no partial result. Nothing is retried
//! internally - retry, if any, belongs to the hosting transaction layer.
//!
//! A context value whose type has no defined comparison is *not* an error:
//! filter and sort skip such values with a `tracing` diagnostic.

use thiserror::Error;

/// Result type alias for ledgerq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for ledgerq operations
#[derive(Debug, Error)]
pub enum Error {
    /// Key absent on Get/Update/Delete/Swap
    #[error("key {0:?} not found")]
    NotFound(String),

    /// Malformed caller input: context JSON, query syntax, or an
    /// unparsable filter comparison value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Pop on an empty queue
    #[error("collection is empty")]
    EmptyCollection,

    /// Stored bytes did not decode to a record
    #[error("decode stored record: {0}")]
    Decode(String),

    /// Ledger adapter failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("01589702933-757936000".to_string());
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("01589702933-757936000"));
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("context is not valid JSON".to_string());
        assert!(err.to_string().contains("invalid argument"));
    }

    #[test]
    fn test_error_display_empty_collection() {
        assert_eq!(Error::EmptyCollection.to_string(), "collection is empty");
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad: std::result::Result<crate::Record, _> = serde_json::from_slice(b"{not json");
        let err: Error = bad.unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
