use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::bearer::YearBearer;

/// Which civil day a timestamp is counted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollover {
    /// At or after the bearer's rollover time
    SameDay,
    /// Before the rollover time; the count still sits on the previous civil day
    PriorDay,
}

/// Resolves the effective counting day of `timestamp` during a year named by `bearer`.
///
/// The day boundary sits at the bearer's rollover time instead of midnight. A
/// timestamp exactly at the rollover time already belongs to the new day.
pub fn effective_date(timestamp: NaiveDateTime, bearer: YearBearer) -> (NaiveDate, Rollover) {
    let rollover = bearer.rollover();
    let civil = timestamp.date();

    let (date, decision) = if timestamp.time() < rollover {
        (civil - Days::new(1), Rollover::PriorDay)
    } else {
        (civil, Rollover::SameDay)
    };

    debug!(
        time = %timestamp.time().format("%H:%M"),
        %bearer,
        rollover = %rollover.format("%H:%M"),
        ?decision,
        effective = %date,
        "day rollover resolved"
    );
    (date, decision)
}
