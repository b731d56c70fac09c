use super::extraction::SkipReason;
use std::{collections::BTreeSet, fmt};

/// An Autonomous System Number. Always strictly positive and at most 32 bits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Asn(u32);

/// The set of unique ASNs collected across every source, kept in ascending order.
pub type AsnSet = BTreeSet<Asn>;

impl Asn {
    /// Checked conversion from a wide integer, as found in either source.
    ///
    /// # Examples
    /// ```text
    /// Asn::from_wide(64500)  -> Ok(Asn(64500))
    /// Asn::from_wide(0)      -> Err(SkipReason::NonPositive(0))
    /// Asn::from_wide(1 << 40) -> Err(SkipReason::OutOfRange(1099511627776))
    /// ```
    pub fn from_wide(value: i64) -> Result<Self, SkipReason> {
        if value <= 0 {
            return Err(SkipReason::NonPositive(value));
        }

        u32::try_from(value)
            .map(Asn)
            .map_err(|_| SkipReason::OutOfRange(value.unsigned_abs()))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
