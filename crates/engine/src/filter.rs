//! Equality filter over one context field
//!
//! The filter argument arrives as a string; how it is compared depends on
//! the runtime type of the field in each record:
//!
//! - string: exact equality
//! - bool: argument case-insensitively "true"/"false"; anything else
//!   simply doesn't match
//! - int: argument parsed as an integer literal (base 10 or `0x`/`0o`/`0b`
//!   prefixed, `_` separators); a parse failure aborts the whole filter
//! - float: argument parsed as f64; a parse failure aborts the whole filter
//! - anything else: the record is skipped with a diagnostic, never an error
//!
//! A record whose context lacks the field is excluded silently. Note that
//! the int arm only ever fires for in-process records: stored numbers
//! decode as floats.

use ledgerq_core::{Entry, Error, Result, Scalar};

use crate::operation::Filter;

/// Keep the entries whose context field equals the filter argument
pub fn apply_filter(entries: Vec<Entry>, filter: &Filter) -> Result<Vec<Entry>> {
    let mut res = Vec::new();

    for entry in entries {
        let Some(value) = entry.record.context.get(&filter.field) else {
            continue;
        };

        let keep = match value {
            Scalar::String(s) => s == &filter.value,
            Scalar::Bool(b) => {
                (*b && filter.value.eq_ignore_ascii_case("true"))
                    || (!*b && filter.value.eq_ignore_ascii_case("false"))
            }
            Scalar::Int(i) => {
                let wanted = parse_int_literal(&filter.value).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "can't parse {:?} as integer for field {:?}",
                        filter.value, filter.field
                    ))
                })?;
                wanted == *i
            }
            Scalar::Float(f) => {
                let wanted: f64 = filter.value.parse().map_err(|e| {
                    Error::InvalidArgument(format!(
                        "can't parse {:?} as float for field {:?}: {e}",
                        filter.value, filter.field
                    ))
                })?;
                wanted == *f
            }
            Scalar::Null => {
                tracing::warn!(
                    field = %filter.field,
                    ty = value.type_name(),
                    "filter skipped context value with unsupported type"
                );
                continue;
            }
        };

        if keep {
            res.push(entry);
        }
    }

    Ok(res)
}

/// Parse an integer literal: optional sign, base 10 or `0x`/`0o`/`0b`
/// prefix, `_` separators between digits
fn parse_int_literal(raw: &str) -> Option<i64> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (radix, digits) = if let Some(d) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = body.strip_prefix("0o").or_else(|| body.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, d)
    } else {
        (10, body)
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    // go through i128 so that i64::MIN magnitudes survive the sign flip
    let magnitude = i128::from_str_radix(&digits.replace('_', ""), radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}
