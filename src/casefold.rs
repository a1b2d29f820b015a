//! `CaseFolding.txt`
//!
//! ```text
//! 0041; C; 0061; # LATIN CAPITAL LETTER A
//! 00DF; F; 0073 0073; # LATIN SMALL LETTER SHARP S
//! 1E9E; S; 00DF; # LATIN CAPITAL LETTER SHARP S
//! ```

use core::{ops::RangeInclusive, str::FromStr};

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    parse::{self, Field, Violation},
    schema::{hex, hex_lit, Schema},
};

/// Status column of the case folding table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FoldStatus {
    /// Common to simple and full folding.
    Common,
    /// Full folding to a multi-codepoint string.
    Full,
    /// Simple folding where it differs from full.
    Simple,
    /// Turkic special case, locale dependent.
    Turkic,
}

impl FoldStatus {
    /// Whether rows with this status belong in a simple fold table.
    #[must_use]
    pub const fn is_simple(self) -> bool {
        matches!(self, Self::Common | Self::Simple)
    }
}

impl FromStr for FoldStatus {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Common),
            "F" => Ok(Self::Full),
            "S" => Ok(Self::Simple),
            "T" => Ok(Self::Turkic),
            e => Err(Violation::UnknownFoldStatus(e.to_string())),
        }
    }
}

/// A row of the generated case folding table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FoldRecord {
    pub code: u32,
    pub mapping: u32,
}

/// The simple case folding table schema.
#[derive(Debug, Copy, Clone, Default)]
pub struct CaseFold;

impl Schema for CaseFold {
    type Parsed = FoldRecord;
    type Record = FoldRecord;

    const BIN: &'static str = "casefold-gen";
    const SOURCE: &'static str = "https://www.unicode.org/Public/17.0.0/ucd/CaseFolding.txt";
    const EXAMPLE: [&'static str; 4] = [
        "ares_casefold.h",
        "ares_casefold_data_t",
        "ares_casefold_data",
        "ares_casefold.c",
    ];

    fn parse(line: &str) -> Result<Option<FoldRecord>, Violation> {
        let fields = parse::fields(line, 4..=4)?;

        let code = parse::codepoint(Field::Code, fields[0])?;
        let status = fields[1].parse::<FoldStatus>()?;
        let mappings = parse::codepoints(fields[2])?;
        if !status.is_simple() {
            return Ok(None);
        }

        let &[mapping] = mappings.as_slice() else {
            return Err(Violation::MappingLength(mappings.len()));
        };

        Ok(Some(FoldRecord { code, mapping }))
    }

    fn normalize(record: FoldRecord) -> Option<FoldRecord> {
        Some(record)
    }

    fn span(record: &FoldRecord) -> RangeInclusive<u32> {
        record.code..=record.code
    }

    fn c_row(record: &FoldRecord) -> String {
        format!("{{ {}, {} }}", hex(record.code), hex(record.mapping))
    }

    fn rust_fields(record: &FoldRecord) -> TokenStream {
        let code = hex_lit(record.code);
        let mapping = hex_lit(record.mapping);

        quote!(code: #code, mapping: #mapping)
    }
}
