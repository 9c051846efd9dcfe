//! The query mini-language
//!
//! A query arrives as one URL-query-style string, e.g.
//! `from=01463472533-758082000&filter=country=BY&sort=-num`.
//!
//! Recognized parameters:
//! - `from`, `to` - the key-range selector; `to` is exclusive
//! - `filter` - exactly one `field=value` equality pair
//! - `sort` - one field name, with an optional leading `-` for descending
//!
//! Values are percent-escaped (`+` decodes to space). A parameter present
//! with an empty value is unset, not "set to empty". Unknown parameter
//! names are ignored. On duplicates the first occurrence wins, even when
//! its value is empty.

use std::collections::HashSet;

use ledgerq_core::{Error, Result};

const PARAM_FROM: &str = "from";
const PARAM_TO: &str = "to";
const PARAM_FILTER: &str = "filter";
const PARAM_SORT: &str = "sort";

/// Key-range selector; empty strings mean "unbounded" on that side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Inclusive lower key bound; empty starts at the first key
    pub from: String,
    /// Exclusive upper key bound; empty defaults to the key for "now"
    pub to: String,
}

/// Equality filter over one context field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Context field name
    pub field: String,
    /// Comparison argument, compared according to the field's runtime type
    pub value: String,
}

/// Sort directive over one context field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Context field name; empty makes the sort a no-op
    pub field: String,
    /// Ascending when true, descending when false
    pub ascending: bool,
}

/// A parsed query: range selector plus optional filter and sort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    /// Key range to scan
    pub selector: Selector,
    /// Equality filter, if requested
    pub filter: Option<Filter>,
    /// Sort directive, if requested
    pub sort: Option<Sort>,
}

impl Operation {
    /// Parse the query mini-language
    pub fn parse(raw: &str) -> Result<Operation> {
        let mut op = Operation::default();
        let mut seen: HashSet<String> = HashSet::new();

        for segment in raw.split('&') {
            if segment.is_empty() {
                continue;
            }

            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let name = decode_component(name)?;
            let value = decode_component(value)?;

            // first occurrence of a name claims it, even with an empty value
            if !seen.insert(name.clone()) {
                continue;
            }
            if value.is_empty() {
                continue;
            }

            match name.as_str() {
                PARAM_FROM => op.selector.from = value,
                PARAM_TO => op.selector.to = value,
                PARAM_FILTER => {
                    let parts: Vec<&str> = value.split('=').collect();
                    if parts.len() != 2 {
                        return Err(Error::InvalidArgument(format!(
                            "wrong filter format {value:?}: expected exactly one \"field=value\" pair"
                        )));
                    }
                    if !parts[0].is_empty() {
                        op.filter = Some(Filter {
                            field: parts[0].to_owned(),
                            value: parts[1].to_owned(),
                        });
                    }
                }
                PARAM_SORT => {
                    let (field, ascending) = match value.strip_prefix('-') {
                        Some(rest) => (rest, false),
                        None => (value.as_str(), true),
                    };
                    if !field.is_empty() {
                        op.sort = Some(Sort {
                            field: field.to_owned(),
                            ascending,
                        });
                    }
                }
                _ => {} // unknown parameters are ignored
            }
        }

        Ok(op)
    }
}

/// Decode one percent-escaped query component; `+` becomes a space
fn decode_component(raw: &str) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = |b: Option<&u8>| b.and_then(|b| (*b as char).to_digit(16));
                match (hex(bytes.get(i + 1)), hex(bytes.get(i + 2))) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi * 16 + lo) as u8);
                        i += 3;
                    }
                    _ => {
                        return Err(Error::InvalidArgument(format!(
                            "invalid percent escape in query component {raw:?}"
                        )))
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out)
        .map_err(|_| Error::InvalidArgument(format!("query component {raw:?} is not valid UTF-8")))
}
