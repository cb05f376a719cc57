//! Errors raised while building inputs for the conversion.
//!
//! The conversion itself is total; only the construction of a
//! [`CivilTimestamp`](crate::CivilTimestamp) or a table range can fail.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("cannot parse {input:?} as a civil timestamp (expected YYYY-MM-DDTHH:MM)")]
    Parse { input: String },

    #[error("range start {from} is after range end {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
}
