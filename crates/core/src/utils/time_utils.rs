use chrono::{Days, NaiveDate, Utc};

use crate::errors::{Error, Result};

/// Today's date in UTC, the default forecast start.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Returns `periods` consecutive calendar dates starting at `start`
/// (`dates[i] = start + i days`).
pub fn forecast_dates(start: NaiveDate, periods: u32) -> Result<Vec<NaiveDate>> {
    let overflow = || {
        Error::invalid_parameter(format!(
            "forecast horizon of {} periods from {} overflows the calendar",
            periods, start
        ))
    };
    if periods > 0 {
        start
            .checked_add_days(Days::new(u64::from(periods) - 1))
            .ok_or_else(overflow)?;
    }
    (0..u64::from(periods))
        .map(|offset| start.checked_add_days(Days::new(offset)).ok_or_else(overflow))
        .collect()
}

/// Number of calendar days in `[start, end]`, or `None` when `end < start`.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end < start {
        return None;
    }
    u32::try_from((end - start).num_days() + 1).ok()
}
