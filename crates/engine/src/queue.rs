//! LedgerQueue: the public operation surface
//!
//! A stateless facade over one [`Ledger`]. Every operation is a
//! self-contained read-then-write sequence; nothing is cached between
//! calls and nothing runs concurrently inside an operation. The hosting
//! transaction boundary decides what happens to writes already issued
//! when an operation aborts.
//!
//! Queue semantics are synthesized from forward range scans: `front` is
//! the first key of `["", now)`, `back` is the last - found by consuming
//! the whole scan, since the store has no reverse scan. Cost proportional
//! to collection size, accepted.

use chrono::{DateTime, Utc};

use ledgerq_core::{key_for_now, timed_key, Context, Entry, Error, Ledger, Record, Result, Scalar};

use crate::filter::apply_filter;
use crate::operation::Operation;
use crate::scan::scan_range;
use crate::sort::apply_sort;

/// Document queue and query surface over an ordered key-value ledger
pub struct LedgerQueue<L> {
    ledger: L,
}

impl<L: Ledger> LedgerQueue<L> {
    /// Wrap a ledger in the queue facade
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// The underlying ledger
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Unwrap the facade, returning the ledger
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Write the base set of records and return them in creation order
    pub fn seed(&self) -> Result<Vec<Entry>> {
        let fixtures = [
            ("2011-05-17T11:08:53.75809+03:00", country("UA")),
            ("2012-05-17T11:08:53.758089+03:00", country("BY")),
            ("2013-05-17T11:08:53.758087+03:00", country("RU2")),
            ("2014-05-17T11:08:53.758086+03:00", country("BY")),
            (
                "2016-05-17T11:08:53.758082+03:00",
                Context::from([
                    ("country".to_string(), Scalar::from("BY")),
                    ("num".to_string(), Scalar::Int(10_000_000)),
                ]),
            ),
            ("2015-05-17T11:08:53.758084+03:00", country("UA")),
            ("2017-05-17T11:08:53.758081+03:00", country("BY")),
            ("2018-05-17T11:08:53.758079+03:00", country("UA")),
            ("2019-05-17T11:08:53.758077+03:00", country("RU")),
            ("2020-05-17T11:08:53.757936+03:00", country("BY")),
        ];

        let mut entries = Vec::with_capacity(fixtures.len());
        for (stamp, context) in fixtures {
            let created_at = parse_stamp(stamp)?;
            let record = Record {
                created_at,
                context,
            };
            let key = timed_key(created_at);
            self.ledger.put(&key, &record.encode()?)?;
            tracing::debug!(%key, "seeded queue record");
            entries.push(Entry::new(key, record));
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(entries)
    }

    /// Read one record by key
    pub fn get(&self, key: &str) -> Result<Entry> {
        let blob = self
            .ledger
            .get(key)?
            .ok_or_else(|| Error::NotFound(key.to_owned()))?;

        Ok(Entry::new(key, Record::decode(&blob)?))
    }

    /// Merge a JSON context patch into an existing record
    ///
    /// The patch overlays the stored context key by key; fields it does
    /// not mention are kept. `None` or an empty string rewrites the record
    /// unchanged. `created_at` is never touched.
    pub fn update(&self, key: &str, patch: Option<&str>) -> Result<Entry> {
        let mut entry = self.get(key)?;

        if let Some(js) = patch.filter(|p| !p.is_empty()) {
            let overlay: Context = serde_json::from_str(js).map_err(|e| {
                Error::InvalidArgument(format!("context patch is not valid JSON: {e}"))
            })?;
            entry.record.context.extend(overlay);
        }

        self.ledger.put(&entry.key, &entry.record.encode()?)?;

        Ok(entry)
    }

    /// Remove a record by key; `NotFound` when it doesn't exist
    pub fn delete(&self, key: &str) -> Result<()> {
        self.get(key)?;
        self.ledger.delete(key)
    }

    /// Every record up to now, in key (creation) order
    pub fn get_all(&self) -> Result<Vec<Entry>> {
        self.get_range("", "")
    }

    /// Records in `[from, to)`; bounds normalize per [`scan_range`]
    pub fn get_range(&self, from: &str, to: &str) -> Result<Vec<Entry>> {
        scan_range(&self.ledger, from, to)
    }

    /// Run a mini-language query: range, then filter, then sort
    pub fn query(&self, raw: &str) -> Result<Vec<Entry>> {
        let op = Operation::parse(raw)?;

        let mut entries = self.get_range(&op.selector.from, &op.selector.to)?;
        if let Some(filter) = &op.filter {
            entries = apply_filter(entries, filter)?;
        }
        if let Some(sort) = &op.sort {
            entries = apply_sort(entries, sort);
        }

        Ok(entries)
    }

    /// Append a record stamped with the current time
    ///
    /// The optional argument is a JSON context object; `None` or an empty
    /// string appends a record with an empty context.
    pub fn push_back(&self, context_json: Option<&str>) -> Result<Entry> {
        let mut record = Record::empty();

        if let Some(js) = context_json.filter(|p| !p.is_empty()) {
            record.context = serde_json::from_str(js)
                .map_err(|e| Error::InvalidArgument(format!("context is not valid JSON: {e}")))?;
        }

        let key = timed_key(record.created_at);
        self.ledger.put(&key, &record.encode()?)?;
        tracing::debug!(%key, "pushed queue record");

        Ok(Entry::new(key, record))
    }

    /// First record of the queue, or `None` when the queue is empty
    pub fn front(&self) -> Result<Option<Entry>> {
        let to = key_for_now();
        let mut scan = self.ledger.scan("", &to)?;

        match scan.next() {
            None => Ok(None),
            Some(item) => {
                let (key, blob) = item?;
                Ok(Some(Entry::new(key, Record::decode(&blob)?)))
            }
        }
    }

    /// Last record of the queue, or `None` when the queue is empty
    ///
    /// Consumes the whole scan; only the final blob is decoded.
    pub fn back(&self) -> Result<Option<Entry>> {
        let to = key_for_now();
        let mut last = None;

        for item in self.ledger.scan("", &to)? {
            last = Some(item?);
        }

        match last {
            None => Ok(None),
            Some((key, blob)) => Ok(Some(Entry::new(key, Record::decode(&blob)?))),
        }
    }

    /// Remove and return the last record; `EmptyCollection` when empty
    pub fn pop(&self) -> Result<Entry> {
        let entry = self.back()?.ok_or(Error::EmptyCollection)?;

        self.ledger.delete(&entry.key)?;
        tracing::debug!(key = %entry.key, "popped queue record");

        Ok(entry)
    }

    /// Exchange the context payloads of two records
    ///
    /// Each key keeps its own identity and its own stored creation
    /// timestamp; only the contexts move. `swap(k, k)` succeeds without
    /// touching the store. The two writes are not atomic: if the second
    /// fails after the first succeeded, `key_b` is left holding `key_a`'s
    /// context with no rollback.
    pub fn swap(&self, key_a: &str, key_b: &str) -> Result<()> {
        if key_a == key_b {
            return Ok(());
        }

        let first = self.get(key_a)?;
        let second = self.get(key_b)?;

        let for_b = Record {
            created_at: second.record.created_at,
            context: first.record.context,
        };
        let for_a = Record {
            created_at: first.record.created_at,
            context: second.record.context,
        };

        self.ledger.put(key_b, &for_b.encode()?)?;
        self.ledger.put(key_a, &for_a.encode()?)?;

        Ok(())
    }
}

fn country(code: &str) -> Context {
    Context::from([("country".to_string(), Scalar::from(code))])
}

fn parse_stamp(stamp: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(stamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::InvalidArgument(format!("timestamp {stamp:?}: {e}")))
}
