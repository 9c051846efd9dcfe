//! Field sort over the scanned candidate set
//!
//! Sorting by a possibly-missing, possibly-mixed-type context field is not
//! a strict weak ordering, so records are classified once up front and the
//! sort runs on (class, value) pairs instead of leaning on a pairwise
//! comparator that isn't transitive:
//!
//! - class 0: field present with the reference type - the type of the
//!   first record in scan order that has the field. Ordered by value.
//! - class 1: field present with any other runtime type. Left in relative
//!   order, with a diagnostic per record.
//! - class 2: field absent. Left in relative order.
//!
//! Classes always sort 0 < 1 < 2; the direction flag reverses only the
//! value comparison inside class 0, so missing-field records sink to the
//! end in both directions. Within class 0, bools order `true` before
//! `false` ascending; floats use IEEE partial order with incomparable
//! pairs treated as equal.

use std::cmp::Ordering;

use ledgerq_core::{Entry, Scalar};

use crate::operation::Sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortClass {
    Typed,
    Foreign,
    Absent,
}

/// Order the entries by one context field; a no-op when the field is empty
pub fn apply_sort(entries: Vec<Entry>, sort: &Sort) -> Vec<Entry> {
    if sort.field.is_empty() {
        return entries;
    }

    let Some(reference) = entries
        .iter()
        .find_map(|e| e.record.context.get(&sort.field))
        .map(Scalar::type_name)
    else {
        // no record has the field; nothing to order by
        return entries;
    };

    let mut decorated: Vec<(SortClass, Option<Scalar>, Entry)> = entries
        .into_iter()
        .map(|entry| {
            let value = entry.record.context.get(&sort.field).cloned();
            let class = match &value {
                None => SortClass::Absent,
                Some(v) if v.type_name() == reference => SortClass::Typed,
                Some(v) => {
                    tracing::warn!(
                        field = %sort.field,
                        expected = reference,
                        actual = v.type_name(),
                        key = %entry.key,
                        "sort field holds mixed types; record left in scan order"
                    );
                    SortClass::Foreign
                }
            };
            (class, value, entry)
        })
        .collect();

    decorated.sort_by(|(class_a, value_a, _), (class_b, value_b, _)| {
        class_a.cmp(class_b).then_with(|| match (value_a, value_b) {
            (Some(a), Some(b)) if *class_a == SortClass::Typed => {
                compare_values(a, b, sort.ascending)
            }
            _ => Ordering::Equal,
        })
    });

    decorated.into_iter().map(|(_, _, entry)| entry).collect()
}

/// Same-type value comparison; `ascending` false reverses the result
fn compare_values(a: &Scalar, b: &Scalar, ascending: bool) -> Ordering {
    let forward = match (a, b) {
        (Scalar::String(a), Scalar::String(b)) => a.cmp(b),
        (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
        (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        // ascending puts true before false
        (Scalar::Bool(a), Scalar::Bool(b)) => b.cmp(a),
        _ => Ordering::Equal,
    };

    if ascending {
        forward
    } else {
        forward.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerq_core::{Context, Record};

    fn entry(key: &str, pairs: &[(&str, Scalar)]) -> Entry {
        Entry::new(
            key,
            Record::new(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect::<Context>(),
            ),
        )
    }

    fn keys(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    fn by(field: &str, ascending: bool) -> Sort {
        Sort {
            field: field.into(),
            ascending,
        }
    }

    #[test]
    fn test_sort_string() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("ZZ"))]),
            entry("1", &[("country", Scalar::from("AA"))]),
            entry("3", &[("country", Scalar::from("BB"))]),
        ];

        let res = apply_sort(entries, &by("country", true));
        assert_eq!(keys(&res), vec!["1", "3", "0"]);
    }

    #[test]
    fn test_sort_string_descending() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("ZZ"))]),
            entry("1", &[("country", Scalar::from("AA"))]),
            entry("3", &[("country", Scalar::from("BB"))]),
        ];

        let res = apply_sort(entries, &by("country", false));
        assert_eq!(keys(&res), vec!["0", "3", "1"]);
    }

    #[test]
    fn test_sort_missing_field_sinks_to_the_end() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("ZZ"))]),
            entry("1", &[("country", Scalar::from("AA"))]),
            entry("4", &[("num", Scalar::from("5"))]),
            entry("3", &[("country", Scalar::from("BB"))]),
        ];

        let res = apply_sort(entries.clone(), &by("country", true));
        assert_eq!(keys(&res), vec!["1", "3", "0", "4"]);

        // direction-independent: the missing-field record stays last
        let res = apply_sort(entries, &by("country", false));
        assert_eq!(keys(&res), vec!["0", "3", "1", "4"]);
    }

    #[test]
    fn test_sort_mixed_types_keep_scan_order() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("ZZ"))]),
            entry("1", &[("country", Scalar::from("AA"))]),
            entry("3", &[("country", Scalar::Int(1))]),
        ];

        let res = apply_sort(entries.clone(), &by("country", true));
        assert_eq!(keys(&res), vec!["1", "0", "3"]);

        let res = apply_sort(entries, &by("country", false));
        assert_eq!(keys(&res), vec!["0", "1", "3"]);
    }

    #[test]
    fn test_sort_int() {
        let entries = vec![
            entry("3", &[("num", Scalar::Int(3))]),
            entry("1", &[("num", Scalar::Int(1))]),
            entry("2", &[("num", Scalar::Int(2))]),
        ];

        let res = apply_sort(entries.clone(), &by("num", true));
        assert_eq!(keys(&res), vec!["1", "2", "3"]);

        let res = apply_sort(entries, &by("num", false));
        assert_eq!(keys(&res), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_float() {
        let entries = vec![
            entry("3", &[("num", Scalar::Float(3.1))]),
            entry("1", &[("num", Scalar::Float(1.2))]),
            entry("2", &[("num", Scalar::Float(2.3))]),
        ];

        let res = apply_sort(entries.clone(), &by("num", true));
        assert_eq!(keys(&res), vec!["1", "2", "3"]);

        let res = apply_sort(entries, &by("num", false));
        assert_eq!(keys(&res), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_sort_bool_true_first_ascending() {
        let entries = vec![
            entry("3", &[("flag", Scalar::Bool(true))]),
            entry("1", &[("flag", Scalar::Bool(false))]),
        ];

        let res = apply_sort(entries.clone(), &by("flag", true));
        assert_eq!(keys(&res), vec!["3", "1"]);

        let res = apply_sort(entries, &by("flag", false));
        assert_eq!(keys(&res), vec!["1", "3"]);
    }

    #[test]
    fn test_sort_empty_field_is_noop() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("ZZ"))]),
            entry("1", &[("country", Scalar::from("AA"))]),
        ];

        let res = apply_sort(entries, &by("", true));
        assert_eq!(keys(&res), vec!["0", "1"]);
    }

    #[test]
    fn test_sort_stable_for_equal_values() {
        let entries = vec![
            entry("0", &[("country", Scalar::from("BY"))]),
            entry("1", &[("country", Scalar::from("BY"))]),
            entry("2", &[("country", Scalar::from("AA"))]),
        ];

        let res = apply_sort(entries, &by("country", true));
        assert_eq!(keys(&res), vec!["2", "0", "1"]);
    }

    #[test]
    fn test_sort_empty_input() {
        assert!(apply_sort(Vec::new(), &by("country", true)).is_empty());
    }
}
