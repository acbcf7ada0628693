//! Ordered commit date set.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// The dates to materialise as commits, in replay order.
///
/// Every date lies in [`year`](Self::year) and the sequence never goes
/// backwards in time. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDateSet {
    year: i32,
    dates: Vec<NaiveDate>,
}

impl CommitDateSet {
    /// Creates a date set for `year`, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutsideYear`] if any date is not in `year`
    /// and [`CalendarError::NotChronological`] if a date precedes the one
    /// before it.
    pub fn new(year: i32, dates: Vec<NaiveDate>) -> Result<Self, CalendarError> {
        if let Some(&date) = dates.iter().find(|d| d.year() != year) {
            return Err(CalendarError::OutsideYear { date, year });
        }
        if let Some(index) = dates.windows(2).position(|w| w[1] < w[0]) {
            return Err(CalendarError::NotChronological {
                index: index + 1,
                date: dates[index + 1],
                previous: dates[index],
            });
        }
        Ok(Self { year, dates })
    }

    /// Creates an empty date set for `year`.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            dates: Vec::new(),
        }
    }

    /// Returns the target year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the dates in replay order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if there is nothing to commit.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns an iterator over the dates.
    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    /// Returns the earliest and latest dates, if any.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }
}

impl<'a> IntoIterator for &'a CommitDateSet {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}
