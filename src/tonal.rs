use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

use crate::constants::{NUMERAL_COUNT, SIGNS, SIGN_COUNT, TONAL_CYCLE};

/// A position in the 260-day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TonalPosition {
    index: u16,
}

impl TonalPosition {
    /// Wraps any integer onto the 260-day count
    pub fn new(index: i64) -> Self {
        Self {
            index: index.rem_euclid(i64::from(TONAL_CYCLE)) as u16,
        }
    }

    /// The position carrying `numeral` (1..=13) on the first sign, Sipaktli.
    ///
    /// 13 and 20 are coprime, so exactly one multiple of 20 below 260 has each
    /// residue mod 13.
    ///
    /// # Panics
    ///
    /// Panics if `numeral` is outside 1..=13.
    pub fn sipaktli(numeral: u8) -> Self {
        let residue = u16::from(numeral).wrapping_sub(1);
        let index = (0..NUMERAL_COUNT)
            .map(|i| i * SIGN_COUNT)
            .find(|index| index % NUMERAL_COUNT == residue)
            .unwrap_or_else(|| panic!("no Sipaktli position for numeral {numeral}"));
        Self { index }
    }

    pub fn index(self) -> u16 {
        self.index
    }

    /// 1..=13
    pub fn numeral(self) -> u8 {
        (self.index % NUMERAL_COUNT) as u8 + 1
    }

    pub fn sign(self) -> &'static str {
        SIGNS[usize::from(self.index % SIGN_COUNT)]
    }

    pub fn advance(self, days: i64) -> Self {
        Self::new(i64::from(self.index) + days)
    }
}

impl fmt::Display for TonalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.numeral(), self.sign())
    }
}

impl Serialize for TonalPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TonalPosition", 3)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("numeral", &self.numeral())?;
        state.serialize_field("sign", self.sign())?;
        state.end()
    }
}

/// Maps an ordinary day (0..360) of a year whose day 1 carries `start_numeral`.
pub fn ordinary_day(day_of_year: u32, start_numeral: u8) -> TonalPosition {
    let start = TonalPosition::sipaktli(start_numeral);
    let position = start.advance(i64::from(day_of_year));
    debug!(
        start_numeral,
        start_index = start.index(),
        day_of_year,
        index = position.index(),
        result = %position,
        "tonal position computed"
    );
    position
}
