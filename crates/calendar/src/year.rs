//! Year parsing.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parses the target year from user-supplied text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if the text is not an integer and
/// [`CalendarError::YearOutOfRange`] if the year has no January 1 in the
/// supported calendar.
pub fn parse_year(input: &str) -> Result<i32, CalendarError> {
    let year: i32 = input
        .trim()
        .parse()
        .map_err(|_| CalendarError::InvalidYear {
            input: input.to_string(),
        })?;
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(year)
}
