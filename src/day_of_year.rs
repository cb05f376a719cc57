use chrono::NaiveDate;
use tracing::debug;

use crate::constants::{GREGORIAN_REFORM, HISTORICAL_OFFSET_DAYS};

/// Zero-based offset of `effective` inside the solar year starting at `start`.
///
/// Dates before the Gregorian reform get the Julian/Gregorian gap added, so the
/// result may exceed the year length for pre-1582 dates near year end.
///
/// # Panics
///
/// Panics if `effective` precedes `start`.
pub fn day_of_year(start: NaiveDate, effective: NaiveDate) -> u32 {
    let elapsed = (effective - start).num_days();
    let day = u32::try_from(elapsed)
        .unwrap_or_else(|_| panic!("{effective} precedes year start {start}"));

    let pre_reform = effective < GREGORIAN_REFORM;
    let day = if pre_reform {
        day.checked_add(HISTORICAL_OFFSET_DAYS)
            .unwrap_or_else(|| panic!("day {day} overflows with the historical offset"))
    } else {
        day
    };

    debug!(%start, %effective, elapsed, pre_reform, day, "day of year computed");
    day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_day_is_zero() {
        assert_eq!(day_of_year(date(2025, 3, 15), date(2025, 3, 15)), 0);
        assert_eq!(day_of_year(date(2025, 3, 15), date(2026, 3, 14)), 364);
    }

    #[test]
    fn test_pre_reform_offset() {
        // Same alignment, one on each side of the reform
        let raw_after = day_of_year(date(1700, 3, 15), date(1700, 6, 1));
        let raw_before = day_of_year(date(1500, 3, 15), date(1500, 6, 1));
        assert_eq!(raw_after, 78);
        assert_eq!(raw_before, raw_after + HISTORICAL_OFFSET_DAYS);
    }

    #[test]
    fn test_reform_boundary() {
        let start = date(1582, 3, 15);
        assert_eq!(day_of_year(start, date(1582, 10, 3)), 202 + 13);
        assert_eq!(day_of_year(start, date(1582, 10, 4)), 203);
    }

    #[test]
    fn test_long_span_is_not_truncated() {
        assert_eq!(day_of_year(date(2025, 3, 15), date(2300, 3, 15)), 100_441);
    }

    #[test]
    #[should_panic(expected = "precedes year start")]
    fn test_effective_before_start_panics() {
        day_of_year(date(2025, 3, 15), date(2025, 3, 14));
    }
}
