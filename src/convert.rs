//! The conversion pipeline: anchor year, day rollover, day of year, then either
//! the ordinary 260-day mapping or the Nemontemi mapping.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::anchor::{locate_anchor, SolarYearAnchor};
use crate::constants::ORDINARY_DAYS;
use crate::day_of_year::day_of_year;
use crate::error::CalendarError;
use crate::nemontemi::nemontemi_day;
use crate::rollover::{effective_date, Rollover};
use crate::tonal::{ordinary_day, TonalPosition};

const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// A civil date and time of day, to the minute.
///
/// All fields are wall-clock values in the one reference frame the calculator
/// works in; no time-zone conversion ever happens inside the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilTimestamp(NaiveDateTime);

impl CivilTimestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(CalendarError::InvalidTime { hour, minute })?;
        Ok(Self(date.and_time(time)))
    }

    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from(date.and_time(time))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

/// Seconds and below are dropped.
impl From<NaiveDateTime> for CivilTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        let truncated = value
            .with_second(0)
            .and_then(|v| v.with_nanosecond(0))
            .unwrap_or(value);
        Self(truncated)
    }
}

impl FromStr for CivilTimestamp {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .map(Self::from)
            .ok_or_else(|| CalendarError::Parse { input: s.to_string() })
    }
}

impl fmt::Display for CivilTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Where the day landed: the ordinary 360 days or the Nemontemi block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DaySign {
    #[serde(rename = "tonal")]
    Ordinary(TonalPosition),
    #[serde(rename = "nemontemi")]
    Nemontemi(TonalPosition),
}

impl DaySign {
    pub fn position(&self) -> TonalPosition {
        match self {
            DaySign::Ordinary(position) | DaySign::Nemontemi(position) => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// The input, normalized as `YYYY-MM-DDTHH:MM:SS`
    pub gregorian_date: String,
    pub is_nemontemi: bool,
    /// e.g. "13 Kali"
    pub xiuhpoualli_year: String,
    /// 1-based day within the solar year
    pub xiuhpoualli_day: u32,
    #[serde(flatten)]
    pub day: DaySign,
}

impl ConversionResult {
    /// Position for an ordinary day, `None` on a Nemontemi day
    pub fn tonal(&self) -> Option<TonalPosition> {
        match self.day {
            DaySign::Ordinary(position) => Some(position),
            DaySign::Nemontemi(_) => None,
        }
    }

    /// Position for a Nemontemi day, `None` on an ordinary day
    pub fn nemontemi(&self) -> Option<TonalPosition> {
        match self.day {
            DaySign::Nemontemi(position) => Some(position),
            DaySign::Ordinary(_) => None,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gregorian date:   {}", self.gregorian_date)?;
        writeln!(f, "Xiuhpoualli year: {}", self.xiuhpoualli_year)?;
        writeln!(f, "Xiuhpoualli day:  {}", self.xiuhpoualli_day)?;
        match self.day {
            DaySign::Ordinary(position) => {
                write!(f, "Tonalli:          {position} (index {})", position.index())
            }
            DaySign::Nemontemi(position) => {
                write!(f, "Nemontemi:        {position} (index {})", position.index())
            }
        }
    }
}

/// Converts a civil timestamp to its Xiuhpoualli year, day of year and 260-day position.
pub fn convert(timestamp: CivilTimestamp) -> ConversionResult {
    let span = info_span!("convert", input = %timestamp);
    let _enter = span.enter();

    let mut anchor = locate_anchor(timestamp.date());
    let (effective, rollover) = effective_date(timestamp.as_naive(), anchor.bearer);

    // Only a prior-day rollover on a year's first civil day lands before its start.
    // Stepping back keeps day_of_year >= 0.
    if rollover == Rollover::PriorDay && effective < anchor.start_date {
        anchor = anchor.prev();
        debug!(?rollover, year = %anchor.label(), "before first rollover, using previous year");
    }

    let day = day_of_year(anchor.start_date, effective);
    let sign = if day >= ORDINARY_DAYS {
        DaySign::Nemontemi(nemontemi_day(effective.year(), day))
    } else {
        DaySign::Ordinary(ordinary_day(day, anchor.start_tonal_numeral))
    };

    build_result(timestamp, &anchor, day, sign)
}

fn build_result(
    timestamp: CivilTimestamp,
    anchor: &SolarYearAnchor,
    day: u32,
    sign: DaySign,
) -> ConversionResult {
    ConversionResult {
        gregorian_date: timestamp.to_string(),
        is_nemontemi: matches!(sign, DaySign::Nemontemi(_)),
        xiuhpoualli_year: anchor.label(),
        xiuhpoualli_day: day + 1,
        day: sign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> CivilTimestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_reference_year_first_day() {
        let result = convert(ts("2025-03-15T12:00"));
        assert_eq!(result.xiuhpoualli_year, "13 Kali");
        assert_eq!(result.xiuhpoualli_day, 1);
        assert!(!result.is_nemontemi);
        assert_eq!(result.tonal().unwrap().to_string(), "5 Sipaktli");
        assert_eq!(result.nemontemi(), None);
    }

    #[test]
    fn test_rollover_boundary_at_year_start() {
        let at = convert(ts("2025-03-15T00:45"));
        assert_eq!(at.xiuhpoualli_year, "13 Kali");
        assert_eq!(at.xiuhpoualli_day, 1);

        let before = convert(ts("2025-03-15T00:44"));
        assert_eq!(before.xiuhpoualli_year, "12 Tekpatl");
        assert_eq!(before.xiuhpoualli_day, 366);
        assert!(before.is_nemontemi);
    }

    #[test]
    fn test_last_ordinary_and_first_nemontemi_are_independent() {
        let last = convert(ts("2026-03-09T12:00"));
        let first = convert(ts("2026-03-10T12:00"));
        assert_eq!(last.xiuhpoualli_day, 360);
        assert_eq!(first.xiuhpoualli_day, 361);

        let last = last.tonal().unwrap();
        let first = first.nemontemi().unwrap();
        assert_eq!(last.index(), 259);
        assert_eq!(first.index(), 255);
        assert_ne!(last.advance(1), first);
    }

    #[test]
    fn test_nemontemi_uses_effective_gregorian_year() {
        let result = convert(ts("2026-03-14T12:00"));
        assert_eq!(result.xiuhpoualli_year, "13 Kali");
        assert_eq!(result.xiuhpoualli_day, 365);
        assert_eq!(result.nemontemi().unwrap().to_string(), "13 Xochitl");
    }

    #[test]
    fn test_pre_reform_date() {
        let result = convert(ts("1500-06-01T12:00"));
        assert_eq!(result.xiuhpoualli_year, "8 Tekpatl");
        assert_eq!(result.xiuhpoualli_day, 91);
        assert_eq!(result.tonal().unwrap().to_string(), "11 Osomatli");
    }

    #[test]
    fn test_pre_reform_nemontemi_past_fifth_day() {
        let result = convert(ts("1500-03-05T12:00"));
        assert_eq!(result.xiuhpoualli_year, "7 Akatl");
        assert_eq!(result.xiuhpoualli_day, 368);
        assert!(result.is_nemontemi);
        let position = result.nemontemi().unwrap();
        assert_eq!(position.index(), 232);
        assert_eq!(position.to_string(), "12 Akatl");

        let result = convert(ts("1500-03-10T12:00"));
        assert_eq!(result.xiuhpoualli_year, "7 Akatl");
        assert_eq!(result.xiuhpoualli_day, 373);
        let position = result.nemontemi().unwrap();
        assert_eq!(position.index(), 237);
        assert_eq!(position.to_string(), "4 Tekpatl");
    }

    #[test]
    fn test_reform_boundary_days() {
        let before = convert(ts("1582-10-03T12:00"));
        assert_eq!(before.xiuhpoualli_year, "12 Tochtli");
        assert_eq!(before.xiuhpoualli_day, 216);
        assert_eq!(before.tonal().unwrap().to_string(), "3 Koskakuautli");

        let after = convert(ts("1582-10-04T12:00"));
        assert_eq!(after.xiuhpoualli_year, "12 Tochtli");
        assert_eq!(after.xiuhpoualli_day, 204);
        assert_eq!(after.tonal().unwrap().to_string(), "4 Kuetspalin");
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(ts("2025-03-15 12:00"), ts("2025-03-15T12:00"));
        assert_eq!(ts("2025-03-15T12:00:59"), ts("2025-03-15T12:00"));
        assert_eq!(ts("2025-03-15T12:00").to_string(), "2025-03-15T12:00:00");
        assert!(matches!(
            "2025-13-01T00:00".parse::<CivilTimestamp>(),
            Err(CalendarError::Parse { .. })
        ));
    }

    #[test]
    fn test_new_validates_fields() {
        assert_eq!(
            CivilTimestamp::new(2025, 2, 29, 0, 0),
            Err(CalendarError::InvalidDate { year: 2025, month: 2, day: 29 })
        );
        assert_eq!(
            CivilTimestamp::new(2025, 2, 28, 24, 0),
            Err(CalendarError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(CivilTimestamp::new(2024, 2, 29, 23, 59).is_ok());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(convert(ts("2025-03-15T12:00"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "gregorianDate": "2025-03-15T12:00:00",
                "isNemontemi": false,
                "xiuhpoualliYear": "13 Kali",
                "xiuhpoualliDay": 1,
                "tonal": {"index": 160, "numeral": 5, "sign": "Sipaktli"}
            })
        );
    }
}
