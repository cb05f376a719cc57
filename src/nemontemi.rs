//! The five Nemontemi days closing each solar year.
//!
//! Their positions in the 260-day count do not continue the ordinary days of
//! the year. They follow their own recurrence, anchored at 1611 ("1 Tochtli"),
//! whose first Nemontemi day is 1 Sipaktli, and advancing 5 places per year.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{NEMONTEMI_REF_TONAL_INDEX, NEMONTEMI_REF_YEAR, NEMONTEMI_STEP, ORDINARY_DAYS};
use crate::tonal::TonalPosition;

pub const NEMONTEMI_DAYS: usize = 5;

/// Position of the first Nemontemi day falling in Gregorian year `year`
pub fn nemontemi_start(year: i32) -> TonalPosition {
    let years_passed = i64::from(year) - i64::from(NEMONTEMI_REF_YEAR);
    let start = TonalPosition::new(years_passed * NEMONTEMI_STEP + i64::from(NEMONTEMI_REF_TONAL_INDEX));
    debug!(year, years_passed, start_index = start.index(), start = %start, "nemontemi anchor");
    start
}

/// Maps a residual day (`day_of_year >= 360`) falling in Gregorian year `year`.
pub fn nemontemi_day(year: i32, day_of_year: u32) -> TonalPosition {
    debug_assert!(day_of_year >= ORDINARY_DAYS);
    // 1-based within the residual block
    let day_num = day_of_year.saturating_sub(ORDINARY_DAYS - 1);
    let position = nemontemi_start(year).advance(i64::from(day_num) - 1);
    debug!(day_of_year, day_num, index = position.index(), result = %position, "nemontemi position computed");
    position
}

/// One row of the yearly Nemontemi report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidualDay {
    /// 1..=5
    pub day: u8,
    pub position: TonalPosition,
}

impl ResidualDay {
    pub fn label(&self) -> String {
        format!("Día {}", self.day)
    }
}

impl fmt::Display for ResidualDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.position)
    }
}

/// Lists the five Nemontemi days of Gregorian year `year`.
pub fn audit_residual_year(year: i32) -> [ResidualDay; NEMONTEMI_DAYS] {
    let start = nemontemi_start(year);
    let days: [ResidualDay; NEMONTEMI_DAYS] = std::array::from_fn(|i| ResidualDay {
        day: i as u8 + 1,
        position: start.advance(i as i64),
    });

    for day in &days {
        info!(year, "{day}");
    }
    days
}
