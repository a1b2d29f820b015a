//! Generators for compact, binary searchable Unicode lookup tables.
//!
//! A published Unicode data file is fetched, every line is parsed strictly,
//! domain rules drop rows that need no representation, and the remaining
//! records are sorted, merged and written out as a C (or Rust) array.
//!
//! ```
//! use ucd_tablegen::{mapping::IdnaMap, Table};
//!
//! let table = Table::<IdnaMap>::from_text("FA6E..FA6F ; disallowed # <reserved>\n").unwrap();
//! assert_eq!(table.records()[0].code_max, 0xFA6F);
//! ```
#![warn(clippy::pedantic, clippy::nursery)]

use core::ops::RangeInclusive;
use std::{io, path::PathBuf};

use thiserror::Error;

pub mod casefold;
pub mod cli;
pub mod config;
pub mod emit;
pub mod fetch;
pub mod logging;
pub mod mapping;
pub mod parse;
pub mod schema;
pub mod table;

pub use schema::Schema;
pub use table::Table;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),
    #[error("line {line}: {violation}: {text}")]
    Format {
        line: usize,
        text: String,
        violation: parse::Violation,
    },
    #[error("invalid file format, no codepoints parsed")]
    Empty,
    #[error(
        "overlapping ranges {:04X}..{:04X} and {:04X}..{:04X}",
        .prev.start(),
        .prev.end(),
        .next.start(),
        .next.end()
    )]
    Overlap {
        prev: RangeInclusive<u32>,
        next: RangeInclusive<u32>,
    },
    #[error(transparent)]
    Emit(#[from] emit::EmitError),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
