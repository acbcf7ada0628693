//! Error types for the chalkline-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the chalkline-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the year text is not an integer.
    #[error("'{input}' is not a valid year, expected a numeric year")]
    InvalidYear {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when the year cannot be represented as a calendar date.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The unrepresentable year.
        year: i32,
    },

    /// Returned when a date set is built from dates that go backwards.
    #[error("dates are not chronological: {date} at index {index} precedes {previous}")]
    NotChronological {
        /// Position of the first out-of-order date.
        index: usize,
        /// The out-of-order date.
        date: NaiveDate,
        /// The date immediately before it.
        previous: NaiveDate,
    },

    /// Returned when a date set is built with a date outside its year.
    #[error("date {date} is outside target year {year}")]
    OutsideYear {
        /// The offending date.
        date: NaiveDate,
        /// The target year.
        year: i32,
    },
}
