use core::{fmt, marker::PhantomData};

use crate::{parse, schema::Schema, Error};

/// Line and record counts gathered while building a [`Table`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Data lines read, comments and blanks excluded.
    pub lines: usize,
    /// Lines the schema does not put in its table.
    pub skipped: usize,
    /// Records dropped by normalization.
    pub dropped: usize,
    /// Records folded into their predecessor.
    pub merged: usize,
}

/// A sorted, merged, binary searchable table.
pub struct Table<S: Schema> {
    records: Vec<S::Record>,
    stats: Stats,
    _schema: PhantomData<S>,
}

impl<S: Schema> fmt::Debug for Table<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("records", &self.records)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<S: Schema> Table<S> {
    /// Builds a table from the full text of an upstream data file.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed line, on overlapping ranges, or if no
    /// records survive.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let (mut records, mut stats) = parse_records::<S>(text)?;
        if records.is_empty() {
            return Err(Error::Empty);
        }

        sort::<S>(&mut records)?;
        stats.merged = merge::<S>(&mut records);

        tracing::info!(
            lines = stats.lines,
            skipped = stats.skipped,
            dropped = stats.dropped,
            merged = stats.merged,
            records = records.len(),
            "built table"
        );

        Ok(Self {
            records,
            stats,
            _schema: PhantomData,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the record covering `code`.
    #[must_use]
    pub fn get(&self, code: u32) -> Option<&S::Record> {
        use core::cmp::Ordering;

        self.records
            .binary_search_by(|record| {
                let span = S::span(record);
                if span.contains(&code) {
                    Ordering::Equal
                } else if code < *span.start() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()
            .map(|i| &self.records[i])
    }
}

/// Parses and normalizes every data line of `text`, in file order.
///
/// # Errors
///
/// Returns [`Error::Format`] for the first line the schema rejects.
pub fn parse_records<S: Schema>(text: &str) -> Result<(Vec<S::Record>, Stats), Error> {
    let mut stats = Stats::default();
    let mut records = Vec::new();

    for (n, raw) in text.lines().enumerate() {
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        stats.lines += 1;

        let parsed = S::parse(parse::strip_comment(raw)).map_err(|violation| Error::Format {
            line: n + 1,
            text: raw.to_string(),
            violation,
        })?;

        let Some(parsed) = parsed else {
            stats.skipped += 1;
            continue;
        };

        match S::normalize(parsed) {
            Some(record) => records.push(record),
            None => stats.dropped += 1,
        }
    }

    tracing::debug!(lines = stats.lines, records = records.len(), "parsed table");

    Ok((records, stats))
}

/// Sorts by first codepoint and rejects overlapping records.
///
/// # Errors
///
/// Returns [`Error::Overlap`] if two records claim the same codepoint.
pub fn sort<S: Schema>(records: &mut [S::Record]) -> Result<(), Error> {
    records.sort_by_key(|x| *S::span(x).start());

    for pair in records.windows(2) {
        let (prev, next) = (S::span(&pair[0]), S::span(&pair[1]));
        if next.start() <= prev.end() {
            return Err(Error::Overlap { prev, next });
        }
    }

    Ok(())
}

/// Merges neighbours in one left to right pass; `records` must be sorted.
///
/// Returns the number of records merged away.
pub fn merge<S: Schema>(records: &mut Vec<S::Record>) -> usize {
    let before = records.len();
    // `dedup_by` hands over (current, retained predecessor)
    records.dedup_by(|next, prev| S::merge(prev, next));
    before - records.len()
}
