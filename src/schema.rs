use core::{fmt, ops::RangeInclusive};

use proc_macro2::{Span, TokenStream};
use syn::LitInt;

use crate::parse::Violation;

/// The shape of one Unicode data table.
///
/// The pipeline in [`crate::table`] is written once against this trait; an
/// implementation only says how a single line turns into a record and how a
/// record is rendered.
pub trait Schema {
    /// A line as read from the table, before any domain rules apply.
    type Parsed: fmt::Debug;
    /// A row of the generated table.
    type Record: fmt::Debug + Clone + PartialEq;

    /// Name of the generator binary, used in the usage message.
    const BIN: &'static str;
    /// The upstream table this schema reads.
    const SOURCE: &'static str;
    /// An example invocation `(headers, datatype, varname, outfile)`.
    const EXAMPLE: [&'static str; 4];

    /// Parses one comment-stripped, non-empty line.
    ///
    /// `Ok(None)` means the line is well formed but not part of this table.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found on the line.
    fn parse(line: &str) -> Result<Option<Self::Parsed>, Violation>;

    /// Applies the table's domain rules. `None` drops the record.
    fn normalize(parsed: Self::Parsed) -> Option<Self::Record>;

    /// The codepoints a record covers; records are sorted by the start.
    fn span(record: &Self::Record) -> RangeInclusive<u32>;

    /// Folds `next` into `prev` if the two can be represented as one row.
    ///
    /// Only called with `next` directly following `prev` in sorted order.
    fn merge(prev: &mut Self::Record, next: &Self::Record) -> bool {
        let _ = (prev, next);
        false
    }

    /// One C initializer row, without indentation or trailing comma.
    fn c_row(record: &Self::Record) -> String;

    /// The field initializers of one Rust struct literal.
    fn rust_fields(record: &Self::Record) -> TokenStream;
}

/// Formats `n` like C's `0x..` literal, right-aligned in a fixed column.
#[must_use]
pub fn hex(n: u32) -> String {
    format!("{:>10}", format!("{n:#x}"))
}

/// A hex integer literal without a type suffix.
#[must_use]
pub fn hex_lit(n: u32) -> LitInt {
    LitInt::new(&format!("{n:#x}"), Span::call_site())
}
