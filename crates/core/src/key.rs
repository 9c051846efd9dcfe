//! Time-derived queue keys
//!
//! A record's key is derived from its creation time and never changes.
//! Keys are opaque, order-comparable strings: the ledger sorts by byte
//! order, so the encoding must guarantee that lexicographic comparison of
//! any two keys equals chronological comparison of the times they encode.
//!
//! ## Contract
//!
//! - format: `"<seconds>-<nanoseconds>"`, both components zero-padded to a
//!   fixed width (11 and 9 digits). Fixed widths make the ordering hold
//!   unconditionally; variable-width decimals would only order correctly
//!   while the digit counts of compared keys happen to match.
//! - times before the unix epoch clamp to the epoch.
//! - there is no decode: nothing reads a time back out of a key.
//! - two records created in the same nanosecond collide and the second
//!   write overwrites the first. Accepted risk, not mitigated.

use chrono::{DateTime, Utc};

/// Digits in the seconds component; covers unix times through year 5138
pub const SECONDS_WIDTH: usize = 11;

/// Digits in the nanoseconds component
pub const NANOS_WIDTH: usize = 9;

/// Derive the queue key for a creation time
pub fn timed_key(at: DateTime<Utc>) -> String {
    let secs = at.timestamp().max(0) as u64;
    // chrono reports leap seconds as nanos >= 1e9; clamp to keep the width fixed
    let nanos = at.timestamp_subsec_nanos().min(999_999_999);
    format!(
        "{secs:0sw$}-{nanos:0nw$}",
        sw = SECONDS_WIDTH,
        nw = NANOS_WIDTH
    )
}

/// Key for the current instant; the default upper bound of queue scans
pub fn key_for_now() -> String {
    timed_key(Utc::now())
}
