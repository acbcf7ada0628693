//! Grid to commit-date mapping.

use chalkline_glyph::Grid;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::anchor::{anchor_sunday, cell_date};
use crate::dates::CommitDateSet;
use crate::error::CalendarError;
use crate::year::parse_year;

/// Counts describing how a grid was mapped, kept for diagnosing empty
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingReport {
    /// Lit cells in the grid.
    pub active_cells: usize,
    /// Lit cells that produced a date in the target year.
    pub mapped: usize,
    /// Lit cells whose date fell after December 31.
    pub dropped: usize,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
}

impl MappingReport {
    /// Returns `true` if the grid had any lit cells at all.
    pub fn has_active_cells(&self) -> bool {
        self.active_cells > 0
    }
}

/// Result of [`map_grid`].
#[derive(Debug, Clone)]
pub struct DateMapping {
    anchor: NaiveDate,
    dates: CommitDateSet,
    report: MappingReport,
}

impl DateMapping {
    /// Returns the first-Sunday anchor used for column 0.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Returns the commit dates.
    pub fn dates(&self) -> &CommitDateSet {
        &self.dates
    }

    /// Returns the mapping diagnostics.
    pub fn report(&self) -> &MappingReport {
        &self.report
    }

    /// Returns `true` if no date was produced.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Maps every lit cell of `grid` to a date in `year`.
///
/// Cells are visited column by column, top to bottom, so the dates come out
/// in chronological order. A cell whose date is not in `year` is dropped.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` cannot be
/// represented, or [`CalendarError::NotChronological`] if the produced
/// sequence is not in date order.
pub fn map_grid(grid: &Grid, year: i32) -> Result<DateMapping, CalendarError> {
    let anchor = anchor_sunday(year)?;
    let (rows, cols) = grid.dimensions();

    let mut dates = Vec::new();
    let mut active_cells = 0;
    for (row, col) in grid.lit_cells() {
        active_cells += 1;
        match cell_date(anchor, row, col) {
            Some(date) if date.year() == year => dates.push(date),
            _ => {}
        }
    }

    let report = MappingReport {
        active_cells,
        mapped: dates.len(),
        dropped: active_cells - dates.len(),
        rows,
        cols,
    };
    debug!(
        year,
        %anchor,
        active_cells = report.active_cells,
        mapped = report.mapped,
        dropped = report.dropped,
        "mapped grid to dates"
    );

    Ok(DateMapping {
        anchor,
        dates: CommitDateSet::new(year, dates)?,
        report,
    })
}

/// Parses `year_text` and maps `grid` onto that year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for non-numeric input, otherwise
/// the errors of [`map_grid`].
pub fn map_grid_for(grid: &Grid, year_text: &str) -> Result<DateMapping, CalendarError> {
    let year = parse_year(year_text)?;
    map_grid(grid, year)
}
