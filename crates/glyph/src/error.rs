//! Error types for the chalkline-glyph crate.

/// Error type for fallible grid and glyph accessors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlyphError {
    /// Returned when a grid coordinate lies outside the 7×52 canvas.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },

    /// Returned when a glyph coordinate lies outside the 5×7 bitmap.
    #[error("pixel ({row}, {col}) is outside the 5x7 glyph")]
    PixelOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
