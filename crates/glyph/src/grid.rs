//! The 7×52 contribution-calendar canvas.

use std::fmt;

use crate::error::GlyphError;

/// Number of rows (weekdays, Sunday first).
pub const ROWS: usize = 7;

/// Number of columns (weeks).
pub const COLS: usize = 52;

/// A 7-row by 52-column canvas of on/off cells.
///
/// The dimensions are fixed by the type. Cells can only be written from
/// within this crate, so a `Grid` handed out by [`crate::rasterize`] is
/// effectively read-only.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[bool; COLS]; ROWS],
}

impl Grid {
    /// Creates an all-blank grid.
    pub fn new() -> Self {
        Self {
            cells: [[false; COLS]; ROWS],
        }
    }

    /// Creates a grid whose cell (`row`, `col`) is `f(row, col)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new();
        for (row, cells) in grid.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        grid
    }

    /// Returns the grid dimensions as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Returns whether the cell at (`row`, `col`) is lit.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::CellOutOfRange`] for coordinates outside 7×52.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GlyphError> {
        if row >= ROWS || col >= COLS {
            return Err(GlyphError::CellOutOfRange {
                row,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }
        Ok(self.cells[row][col])
    }

    /// Writes a full column, top row first.
    pub(crate) fn set_column(&mut self, col: usize, column: [bool; ROWS]) {
        for (row, lit) in column.into_iter().enumerate() {
            self.cells[row][col] = lit;
        }
    }

    /// Returns the number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Returns `true` if at least one cell is lit.
    pub fn has_active_cells(&self) -> bool {
        self.cells.iter().flatten().any(|&lit| lit)
    }

    /// Returns `true` if every cell in column `col` is blank.
    ///
    /// Columns outside the grid are reported as blank.
    pub fn column_is_blank(&self, col: usize) -> bool {
        col >= COLS || self.cells.iter().all(|row| !row[col])
    }

    /// Iterates over lit cells as `(row, col)` pairs, column by column and
    /// top to bottom within a column.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..COLS).flat_map(move |col| {
            (0..ROWS)
                .filter(move |&row| self.cells[row][col])
                .map(move |row| (row, col))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `#` for lit cells and `.` for blank ones, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &ROWS)
            .field("cols", &COLS)
            .field("lit", &self.lit_count())
            .finish()
    }
}
