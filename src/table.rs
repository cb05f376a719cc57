use chrono::{Days, NaiveDate, NaiveTime};
use rayon::prelude::*;
use tracing::info;

use crate::convert::{convert, CivilTimestamp, ConversionResult};
use crate::error::CalendarError;

/// Converts every civil day in `from..=to` at time of day `time`.
///
/// Rows are independent, so they are computed in parallel and returned in
/// ascending date order.
pub fn correspondence_table(
    from: NaiveDate,
    to: NaiveDate,
    time: NaiveTime,
) -> Result<Vec<ConversionResult>, CalendarError> {
    if from > to {
        return Err(CalendarError::InvalidRange { from, to });
    }
    let days = (to - from).num_days() as u64 + 1;

    let rows: Vec<ConversionResult> = (0..days)
        .into_par_iter()
        .map(|offset| convert(CivilTimestamp::from_parts(from + Days::new(offset), time)))
        .collect();

    info!(%from, %to, rows = rows.len(), "correspondence table built");
    Ok(rows)
}
