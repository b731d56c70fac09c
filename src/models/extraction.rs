//! Audited outcomes of the two extractors.
//!
//! Every candidate value either ends up in the ASN set or is recorded as a
//! [`Skipped`] entry, so a run can report exactly what was dropped and why.

use super::asn::{Asn, AsnSet};
use std::fmt;

/// Why a candidate value did not produce an ASN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    NotNumeric(String),
    NonPositive(i64),
    OutOfRange(u64),
    MissingAsn,
    NotAnObject,
    ShortRow { columns: usize },
    MalformedDocument(String),
}

impl SkipReason {
    /// Short, stable label used to group skips in the final report.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::Blank => "blank field",
            SkipReason::NotNumeric(_) => "not numeric",
            SkipReason::NonPositive(_) => "non-positive",
            SkipReason::OutOfRange(_) => "out of range",
            SkipReason::MissingAsn => "missing asn",
            SkipReason::NotAnObject => "not an object",
            SkipReason::ShortRow { .. } => "short row",
            SkipReason::MalformedDocument(_) => "malformed document",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank field"),
            SkipReason::NotNumeric(text) => write!(f, "'{}' is not a number", text),
            SkipReason::NonPositive(n) => write!(f, "{} is not a positive ASN", n),
            SkipReason::OutOfRange(n) => write!(f, "{} does not fit in 32 bits", n),
            SkipReason::MissingAsn => write!(f, "no integer 'asn' field"),
            SkipReason::NotAnObject => write!(f, "record is not an object"),
            SkipReason::ShortRow { columns } => {
                write!(f, "row has {} columns, at least 4 expected", columns)
            }
            SkipReason::MalformedDocument(message) => write!(f, "malformed document: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub location: String,
    pub reason: SkipReason,
}

/// ASNs extracted from one source together with everything that was skipped.
#[derive(Debug, Default)]
pub struct Extraction {
    pub asns: AsnSet,
    pub skipped: Vec<Skipped>,
}

impl Extraction {
    pub fn new() -> Self {
        Extraction::default()
    }

    /// Records the outcome of a single candidate value.
    pub fn record(&mut self, location: impl Into<String>, outcome: Result<Asn, SkipReason>) {
        match outcome {
            Ok(asn) => {
                self.asns.insert(asn);
            }
            Err(reason) => self.skip(location, reason),
        }
    }

    pub fn skip(&mut self, location: impl Into<String>, reason: SkipReason) {
        let location = location.into();
        log::debug!("Skipped {}: {}", location, reason);
        self.skipped.push(Skipped { location, reason });
    }
}
