//! Solar-year anchors and the walk that finds the one containing a date.

use chrono::{Days, NaiveDate};
use tracing::{debug, trace};

use crate::bearer::YearBearer;
use crate::constants::{
    REF_YEAR_GREGORIAN, REF_YEAR_NUMERAL, REF_YEAR_START, REF_YEAR_START_TONAL_NUMERAL,
    START_NUMERAL_STEP, YEAR_NUMERAL_COUNT,
};

/// One instance of the 365-day year cycle.
///
/// Stepping forward advances the year numeral by 1 (mod 13), the bearer by 1
/// (mod 4) and the day-1 numeral by 9 (mod 13). The start date moves by the
/// length of the year being left, which is 366 days when `gregorian_year` is a
/// Gregorian leap year and 365 otherwise. [`SolarYearAnchor::prev`] is the exact
/// inverse of [`SolarYearAnchor::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarYearAnchor {
    pub gregorian_year: i32,
    pub start_date: NaiveDate,
    /// 1..=13
    pub year_numeral: u8,
    pub bearer: YearBearer,
    /// Numeral (1..=13) carried by day 1 of this year
    pub start_tonal_numeral: u8,
}

impl SolarYearAnchor {
    /// The fixed correlation point: 13 Kali, starting 2025-03-15 on numeral 5
    pub const REFERENCE: SolarYearAnchor = SolarYearAnchor {
        gregorian_year: REF_YEAR_GREGORIAN,
        start_date: REF_YEAR_START,
        year_numeral: REF_YEAR_NUMERAL,
        bearer: YearBearer::Kali,
        start_tonal_numeral: REF_YEAR_START_TONAL_NUMERAL,
    };

    /// Number of days until the next anchor starts
    pub fn length(&self) -> u64 {
        year_length(self.gregorian_year)
    }

    /// First civil date of the following cycle
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(self.length())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date()
    }

    /// `"{year_numeral} {bearer}"`, e.g. "13 Kali"
    pub fn label(&self) -> String {
        format!("{} {}", self.year_numeral, self.bearer)
    }

    pub fn next(&self) -> Self {
        Self {
            gregorian_year: self.gregorian_year + 1,
            start_date: self.end_date(),
            year_numeral: cycle_numeral(self.year_numeral, 1),
            bearer: self.bearer.next(),
            start_tonal_numeral: cycle_numeral(self.start_tonal_numeral, START_NUMERAL_STEP),
        }
    }

    pub fn prev(&self) -> Self {
        let gregorian_year = self.gregorian_year - 1;
        Self {
            gregorian_year,
            start_date: self.start_date - Days::new(year_length(gregorian_year)),
            year_numeral: cycle_numeral(self.year_numeral, YEAR_NUMERAL_COUNT - 1),
            bearer: self.bearer.prev(),
            start_tonal_numeral: cycle_numeral(
                self.start_tonal_numeral,
                YEAR_NUMERAL_COUNT - START_NUMERAL_STEP,
            ),
        }
    }
}

/// Finds the anchor whose `[start_date, end_date)` interval contains `date`.
///
/// Walks one solar year at a time from [`SolarYearAnchor::REFERENCE`], so the
/// cost grows linearly with the distance from 2025.
pub fn locate_anchor(date: NaiveDate) -> SolarYearAnchor {
    let mut anchor = SolarYearAnchor::REFERENCE;
    let mut steps = 0u32;

    if date < anchor.start_date {
        while date < anchor.start_date {
            anchor = anchor.prev();
            steps += 1;
            trace!(year = anchor.gregorian_year, start = %anchor.start_date, "stepped back");
        }
    } else {
        loop {
            let next = anchor.next();
            if date < next.start_date {
                break;
            }
            anchor = next;
            steps += 1;
            trace!(year = anchor.gregorian_year, start = %anchor.start_date, "stepped forward");
        }
    }

    debug!(
        %date,
        year = %anchor.label(),
        start = %anchor.start_date,
        steps,
        "anchor year located"
    );
    anchor
}

pub fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn year_length(gregorian_year: i32) -> u64 {
    if is_gregorian_leap(gregorian_year) {
        366
    } else {
        365
    }
}

/// Advances a 1-based numeral in 1..=13 by `step` places
fn cycle_numeral(numeral: u8, step: u8) -> u8 {
    (numeral - 1 + step) % YEAR_NUMERAL_COUNT + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_date_locates_reference() {
        assert_eq!(locate_anchor(date(2025, 3, 15)), SolarYearAnchor::REFERENCE);
        assert_eq!(locate_anchor(date(2026, 3, 14)), SolarYearAnchor::REFERENCE);
    }

    #[test]
    fn test_step_forward() {
        let next = SolarYearAnchor::REFERENCE.next();
        assert_eq!(next.gregorian_year, 2026);
        assert_eq!(next.start_date, date(2026, 3, 15));
        assert_eq!(next.year_numeral, 1);
        assert_eq!(next.bearer, YearBearer::Tochtli);
        assert_eq!(next.start_tonal_numeral, 1);
        assert_eq!(next.label(), "1 Tochtli");
    }

    #[test]
    fn test_step_backward() {
        let prev = SolarYearAnchor::REFERENCE.prev();
        assert_eq!(prev.gregorian_year, 2024);
        assert_eq!(prev.start_date, date(2024, 3, 14));
        assert_eq!(prev.year_numeral, 12);
        assert_eq!(prev.bearer, YearBearer::Tekpatl);
        assert_eq!(prev.start_tonal_numeral, 9);
    }

    #[test]
    fn test_round_trip_both_directions() {
        let mut anchor = SolarYearAnchor::REFERENCE;
        for _ in 0..60 {
            assert_eq!(anchor.next().prev(), anchor);
            assert_eq!(anchor.prev().next(), anchor);
            anchor = anchor.prev();
        }
        let mut anchor = SolarYearAnchor::REFERENCE;
        for _ in 0..60 {
            assert_eq!(anchor.next().prev(), anchor);
            anchor = anchor.next();
        }
    }

    #[test]
    fn test_start_numeral_repeats_after_13_years() {
        let mut anchor = SolarYearAnchor::REFERENCE;
        let mut seen = Vec::new();
        for _ in 0..13 {
            seen.push(anchor.start_tonal_numeral);
            let next = anchor.next();
            assert_ne!(next.start_tonal_numeral, anchor.start_tonal_numeral);
            anchor = next;
        }
        seen.sort_unstable();
        assert_eq!(seen, (1..=13).collect::<Vec<u8>>());
        assert_eq!(anchor.start_tonal_numeral, SolarYearAnchor::REFERENCE.start_tonal_numeral);
        assert_eq!(anchor.year_numeral, SolarYearAnchor::REFERENCE.year_numeral);
    }

    #[test]
    fn test_leap_year_length() {
        let leap = SolarYearAnchor::REFERENCE.prev();
        assert_eq!(leap.gregorian_year, 2024);
        assert_eq!(leap.length(), 366);
        assert_eq!(leap.end_date(), SolarYearAnchor::REFERENCE.start_date);
        assert_eq!(SolarYearAnchor::REFERENCE.length(), 365);

        assert!(is_gregorian_leap(2000));
        assert!(!is_gregorian_leap(1900));
        assert!(!is_gregorian_leap(2025));
    }

    #[test]
    fn test_located_anchor_contains_date() {
        for target in [
            date(1500, 6, 1),
            date(1582, 10, 3),
            date(1999, 12, 31),
            date(2024, 3, 13),
            date(2024, 3, 14),
            date(2025, 3, 14),
            date(2031, 1, 1),
            date(2100, 3, 15),
        ] {
            let anchor = locate_anchor(target);
            assert!(anchor.contains(target), "{target} not in {anchor:?}");
        }
    }

    #[test]
    fn test_locate_boundaries() {
        assert_eq!(locate_anchor(date(2025, 3, 14)).gregorian_year, 2024);
        assert_eq!(locate_anchor(date(2026, 3, 15)).gregorian_year, 2026);
        assert_eq!(locate_anchor(date(1500, 6, 1)).label(), "8 Tekpatl");
    }
}
