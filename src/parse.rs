use core::{fmt, ops::RangeInclusive};

use thiserror::Error;

/// Which column of a table line a value came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    Mapping,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Code => "code",
            Self::Mapping => "mapping",
        })
    }
}

/// A single reason a table line was rejected.
///
/// Any violation aborts the whole run: a line that doesn't fit the expected
/// shape means the upstream table changed format.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Violation {
    #[error("expected {expected} sections delimited by ';', found {found}")]
    FieldCount { expected: &'static str, found: usize },
    #[error("{field} {value:?} not hex formatted")]
    NotHex { field: Field, value: String },
    #[error("too many codes in {0:?}")]
    TooManyCodes(String),
    #[error("range {0:04X}..{1:04X} ends before it starts")]
    ReversedRange(u32, u32),
    #[error("unrecognized status {0:?}")]
    UnknownStatus(String),
    #[error("unrecognized case folding status {0:?}")]
    UnknownFoldStatus(String),
    #[error("expected exactly one mapped codepoint, found {0}")]
    MappingLength(usize),
}

/// Returns `true` if `s` is a non-empty run of ASCII hex digits.
#[must_use]
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses one hex codepoint, surrounding whitespace excluded.
pub fn codepoint(field: Field, s: &str) -> Result<u32, Violation> {
    let not_hex = || Violation::NotHex {
        field,
        value: s.to_string(),
    };

    if !is_hex(s) {
        return Err(not_hex());
    }
    // all hex digits, so the only failure left is overflow
    u32::from_str_radix(s, 16).map_err(|_| not_hex())
}

/// Parses `CODE` or `CODE..CODE`.
pub fn codepoint_range(s: &str) -> Result<RangeInclusive<u32>, Violation> {
    let mut bounds = s.split("..").map(str::trim);

    // `split` always yields at least one item
    let start = codepoint(Field::Code, bounds.next().unwrap_or_default())?;
    let end = match bounds.next() {
        Some(end) => codepoint(Field::Code, end)?,
        None => start,
    };

    if bounds.next().is_some() {
        return Err(Violation::TooManyCodes(s.to_string()));
    }
    if end < start {
        return Err(Violation::ReversedRange(start, end));
    }

    Ok(start..=end)
}

/// Parses a whitespace separated list of hex codepoints.
pub fn codepoints(s: &str) -> Result<Vec<u32>, Violation> {
    s.split_whitespace()
        .map(|x| codepoint(Field::Mapping, x))
        .collect()
}

/// Drops everything from the first `#` onwards.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(data, _)| data)
}

/// Splits a comment-free line on `;`, trimming every field.
///
/// `expected` is the accepted number of fields.
pub fn fields(
    line: &str,
    expected: RangeInclusive<usize>,
) -> Result<Vec<&str>, Violation> {
    let fields = line.split(';').map(str::trim).collect::<Vec<_>>();

    if expected.contains(&fields.len()) {
        Ok(fields)
    } else {
        Err(Violation::FieldCount {
            expected: describe(&expected),
            found: fields.len(),
        })
    }
}

fn describe(expected: &RangeInclusive<usize>) -> &'static str {
    match (*expected.start(), *expected.end()) {
        (2, 4) => "2 - 4",
        (4, 4) => "exactly 4",
        _ => "a different number of",
    }
}
