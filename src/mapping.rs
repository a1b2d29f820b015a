//! `IdnaMappingTable.txt`
//!
//! ```text
//! FA6E..FA6F    ; disallowed                 # NA   <reserved-FA6E>..<reserved-FA6F>
//! FD40..FD4F    ; valid      ;      ; NV8    # 14.0 ARABIC LIGATURE RAHIMAHU ALLAAH..
//! FD92          ; mapped     ; 0645 062C 062E #1.1  ARABIC LIGATURE MEEM WITH JEEM..
//! ```

use core::{ops::RangeInclusive, str::FromStr};

use proc_macro2::TokenStream;
use quote::quote;

use crate::{
    parse::{self, Violation},
    schema::{hex, hex_lit, Schema},
};

/// Number of mapped codepoints a generated row has room for.
pub const MAPPING_SLOTS: usize = 3;

/// Status column of the IDNA mapping table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Valid,
    Ignored,
    Mapped,
    Disallowed,
    Deviation,
}

impl FromStr for Status {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "ignored" => Ok(Self::Ignored),
            "mapped" => Ok(Self::Mapped),
            "disallowed" => Ok(Self::Disallowed),
            "deviation" => Ok(Self::Deviation),
            e => Err(Violation::UnknownStatus(e.to_string())),
        }
    }
}

/// Informative IDNA2008 column; only meaningful on `valid` rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Idna2008 {
    /// Excluded from IDNA2008 for all versions of Unicode.
    Nv8,
    /// Excluded from IDNA2008 for the current version of Unicode.
    Xv8,
}

impl Idna2008 {
    /// Reads the flag; anything but `NV8`/`XV8` carries no exclusion.
    #[must_use]
    pub fn of(s: &str) -> Option<Self> {
        match s {
            "NV8" => Some(Self::Nv8),
            "XV8" => Some(Self::Xv8),
            _ => None,
        }
    }
}

/// Status of a row that made it into the generated table.
///
/// `valid` has no code: a codepoint missing from the table is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StatusCode {
    Disallowed = 1,
    Ignored = 2,
    Mapped = 3,
}

impl StatusCode {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A line of the mapping table, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdnaLine {
    pub codes: RangeInclusive<u32>,
    pub status: Status,
    pub mapping: Vec<u32>,
    pub idna2008: Option<Idna2008>,
}

/// A row of the generated mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingRecord {
    pub code_min: u32,
    pub code_max: u32,
    pub status: StatusCode,
    pub mapping: Vec<u32>,
}

impl MappingRecord {
    /// Mapping padded or cut to [`MAPPING_SLOTS`] entries.
    #[must_use]
    pub fn slots(&self) -> [u32; MAPPING_SLOTS] {
        let mut slots = [0; MAPPING_SLOTS];
        for (slot, &c) in slots.iter_mut().zip(&self.mapping) {
            *slot = c;
        }
        slots
    }
}

/// The IDNA mapping table schema.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdnaMap;

impl Schema for IdnaMap {
    type Parsed = IdnaLine;
    type Record = MappingRecord;

    const BIN: &'static str = "idnamap-gen";
    const SOURCE: &'static str = "https://www.unicode.org/Public/17.0.0/idna/IdnaMappingTable.txt";
    const EXAMPLE: [&'static str; 4] = [
        "ares_idnamap.h",
        "ares_idnamap_data_t",
        "ares_idnamap_data",
        "ares_idnamap.c",
    ];

    fn parse(line: &str) -> Result<Option<IdnaLine>, Violation> {
        let fields = parse::fields(line, 2..=4)?;

        let status = fields[1].parse::<Status>()?;
        let codes = parse::codepoint_range(fields[0])?;
        let mapping = match fields.get(2) {
            Some(x) => parse::codepoints(x)?,
            None => Vec::new(),
        };
        let idna2008 = match (status, fields.get(3)) {
            (Status::Valid, Some(x)) => Idna2008::of(x),
            _ => None,
        };

        Ok(Some(IdnaLine {
            codes,
            status,
            mapping,
            idna2008,
        }))
    }

    fn normalize(line: IdnaLine) -> Option<MappingRecord> {
        let status = match (line.status, line.idna2008) {
            // IDNA2008 exclusions override valid
            (Status::Valid, Some(_)) => StatusCode::Disallowed,
            // we don't support transitional processing
            (Status::Valid, None) | (Status::Deviation, _) => return None,
            (Status::Disallowed, _) => StatusCode::Disallowed,
            (Status::Ignored, _) => StatusCode::Ignored,
            (Status::Mapped, _) => StatusCode::Mapped,
        };

        if line.mapping.len() > MAPPING_SLOTS {
            tracing::debug!(
                code_min = *line.codes.start(),
                len = line.mapping.len(),
                "mapping longer than the row has slots for"
            );
        }

        Some(MappingRecord {
            code_min: *line.codes.start(),
            code_max: *line.codes.end(),
            status,
            mapping: line.mapping,
        })
    }

    fn span(record: &MappingRecord) -> RangeInclusive<u32> {
        record.code_min..=record.code_max
    }

    fn merge(prev: &mut MappingRecord, next: &MappingRecord) -> bool {
        let contiguous = prev
            .code_max
            .checked_add(1)
            .is_some_and(|x| x == next.code_min);

        if contiguous && prev.status == next.status && prev.mapping == next.mapping {
            prev.code_max = next.code_max;
            true
        } else {
            false
        }
    }

    fn c_row(record: &MappingRecord) -> String {
        let [a, b, c] = record.slots();
        format!(
            "{{ {}, {}, {}, {{ {}, {}, {} }} }}",
            hex(record.code_min),
            hex(record.code_max),
            record.status.code(),
            hex(a),
            hex(b),
            hex(c),
        )
    }

    fn rust_fields(record: &MappingRecord) -> TokenStream {
        let code_min = hex_lit(record.code_min);
        let code_max = hex_lit(record.code_max);
        let status = proc_macro2::Literal::u8_unsuffixed(record.status.code());
        let mapping = record.slots().into_iter().map(hex_lit);

        quote!(code_min: #code_min, code_max: #code_max, status: #status, mapping: [#(#mapping),*])
    }
}
