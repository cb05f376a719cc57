//! # tonalpouali
//!
//! Converts a civil (Gregorian) date and time into the Xiuhpoualli solar year
//! and the Tonalpouali 260-day count, with the five Nemontemi days at the end
//! of each year mapped through their own anchor.
//!
//! ```text
//! CivilTimestamp
//!     -> locate_anchor      solar year containing the civil date
//!     -> effective_date     bearer-specific day rollover
//!     -> day_of_year        offset in the year, Julian gap before 1582-10-04
//!     -> ordinary_day       day 0..360
//!      | nemontemi_day      day 360..
//!     -> ConversionResult
//! ```
//!
//! ```
//! use tonalpouali::{convert, CivilTimestamp};
//!
//! let result = convert("2025-03-15T12:00".parse::<CivilTimestamp>().unwrap());
//! assert_eq!(result.xiuhpoualli_year, "13 Kali");
//! assert_eq!(result.tonal().unwrap().to_string(), "5 Sipaktli");
//! ```

mod anchor;
mod bearer;
pub mod constants;
mod convert;
mod day_of_year;
mod error;
mod nemontemi;
mod rollover;
mod table;
mod tonal;

pub use anchor::{is_gregorian_leap, locate_anchor, SolarYearAnchor};
pub use bearer::YearBearer;
pub use convert::{convert, CivilTimestamp, ConversionResult, DaySign};
pub use day_of_year::day_of_year;
pub use error::CalendarError;
pub use nemontemi::{audit_residual_year, nemontemi_day, nemontemi_start, ResidualDay, NEMONTEMI_DAYS};
pub use rollover::{effective_date, Rollover};
pub use table::correspondence_table;
pub use tonal::{ordinary_day, TonalPosition};
