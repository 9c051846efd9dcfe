//! Queue records and their stored form
//!
//! A record is the unit the queue stores: a creation timestamp plus a flat
//! context mapping. The ledger owns the durable bytes; a `Record` is only
//! a transient decoded view, re-read from the store on every operation.
//!
//! The blob format is JSON with field names `created_at` and `context`.
//! Decoding applies the numeric round-trip rule of [`crate::value`]: every
//! stored number comes back as a float.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::Context;

/// One queue element: creation time plus dynamic context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Creation time, nanosecond precision; the record's key is derived
    /// from it and never changes
    pub created_at: DateTime<Utc>,
    /// Flat mapping of field name to scalar value; blobs written before
    /// the record carried any context decode to an empty mapping
    #[serde(default)]
    pub context: Context,
}

impl Record {
    /// Create a record with the given context, stamped with the current time
    pub fn new(context: Context) -> Self {
        Self {
            created_at: Utc::now(),
            context,
        }
    }

    /// Create an empty record stamped with the current time
    pub fn empty() -> Self {
        Self::new(Context::new())
    }

    /// Serialize to the stored blob form
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from the stored blob form
    pub fn decode(blob: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(blob)?)
    }
}

/// A (key, record) pair as returned by scans and queries
///
/// Serializes with field names `key` and `object`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The record's stored key
    pub key: String,
    /// The decoded record
    #[serde(rename = "object")]
    pub record: Record,
}

impl Entry {
    /// Pair a key with its decoded record
    pub fn new(key: impl Into<String>, record: Record) -> Self {
        Self {
            key: key.into(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use crate::Error;

    fn context_of(pairs: &[(&str, Scalar)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_round_trip_preserves_time_and_strings() {
        let record = Record::new(context_of(&[("country", Scalar::from("BY"))]));
        let decoded = Record::decode(&record.encode().unwrap()).unwrap();

        assert_eq!(decoded.created_at, record.created_at);
        assert_eq!(decoded.context, record.context);
    }

    #[test]
    fn test_round_trip_collapses_integers() {
        let record = Record::new(context_of(&[("num", Scalar::Int(10_000_000))]));
        let decoded = Record::decode(&record.encode().unwrap()).unwrap();

        assert_eq!(decoded.context["num"], Scalar::Float(10_000_000.0));
    }

    #[test]
    fn test_blob_field_names() {
        let record = Record::new(Context::new());
        let blob = record.encode().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&blob).unwrap();

        assert!(json.get("created_at").is_some());
        assert!(json.get("context").is_some());
    }

    #[test]
    fn test_decode_rejects_corrupt_bytes() {
        let err = Record::decode(b"{definitely not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_nested_context() {
        let err = Record::decode(
            br#"{"created_at":"2020-05-17T08:08:53.757936Z","context":{"a":{"b":1}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = Entry::new("00000000007-000000005", Record::new(Context::new()));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["key"], "00000000007-000000005");
        assert!(json.get("object").is_some());
    }

    #[test]
    fn test_nanosecond_precision_survives_round_trip() {
        let mut record = Record::empty();
        record.created_at = "2020-05-17T11:08:53.757936+03:00"
            .parse::<DateTime<Utc>>()
            .unwrap();
        let decoded = Record::decode(&record.encode().unwrap()).unwrap();

        assert_eq!(decoded.created_at.timestamp(), 1_589_702_933);
        assert_eq!(decoded.created_at.timestamp_subsec_nanos(), 757_936_000);
    }
}
