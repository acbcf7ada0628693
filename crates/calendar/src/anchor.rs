//! First-Sunday anchor and grid-cell offsets.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;

/// Returns the first Sunday on or after January 1 of `year`.
///
/// This is the date of row 0, column 0 of the grid. It always lies within
/// January 1–7 of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if the year cannot be
/// represented.
pub fn anchor_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    let out_of_range = CalendarError::YearOutOfRange { year };
    let mut date = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| out_of_range.clone())?;
    while date.weekday() != Weekday::Sun {
        date = date.succ_opt().ok_or_else(|| out_of_range.clone())?;
    }
    Ok(date)
}

/// Day offset of cell (`row`, `col`) from the anchor: one week per column,
/// one day per row. Returns `None` on overflow.
pub fn cell_offset_days(row: usize, col: usize) -> Option<u64> {
    let days = col.checked_mul(7)?.checked_add(row)?;
    u64::try_from(days).ok()
}

/// Returns the date for cell (`row`, `col`), or `None` if it would overflow
/// the calendar.
pub fn cell_date(anchor: NaiveDate, row: usize, col: usize) -> Option<NaiveDate> {
    anchor.checked_add_days(Days::new(cell_offset_days(row, col)?))
}
