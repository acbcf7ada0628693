//! 5×7 glyph bitmap.

use crate::error::GlyphError;

/// Width of every glyph in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Height of every glyph in rows (one per weekday).
pub const GLYPH_HEIGHT: usize = 7;

/// A 5-column by 7-row bitmap.
///
/// Each row is stored in the low five bits of a byte, most significant of
/// those five bits being the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// The all-blank glyph used for spaces and unsupported characters.
    pub const BLANK: Glyph = Glyph::from_rows([0; GLYPH_HEIGHT]);

    /// Creates a glyph from seven 5-bit row patterns.
    ///
    /// Bits above the fifth are ignored.
    pub const fn from_rows(rows: [u8; GLYPH_HEIGHT]) -> Self {
        let mut masked = [0u8; GLYPH_HEIGHT];
        let mut i = 0;
        while i < GLYPH_HEIGHT {
            masked[i] = rows[i] & 0b1_1111;
            i += 1;
        }
        Self { rows: masked }
    }

    /// Returns the raw 5-bit row patterns.
    pub fn rows(&self) -> [u8; GLYPH_HEIGHT] {
        self.rows
    }

    /// Returns whether the pixel at (`row`, `col`) is lit.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::PixelOutOfRange`] if the coordinate is outside
    /// the 5×7 bitmap.
    pub fn pixel(&self, row: usize, col: usize) -> Result<bool, GlyphError> {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return Err(GlyphError::PixelOutOfRange { row, col });
        }
        Ok(self.lit(row, col))
    }

    /// Returns the glyph as a 7×5 matrix of 0/1 cells.
    pub fn bitmap(&self) -> [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        let mut out = [[0u8; GLYPH_WIDTH]; GLYPH_HEIGHT];
        for (row, cells) in out.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = u8::from(self.lit(row, col));
            }
        }
        out
    }

    /// Returns one column of the glyph, top row first.
    pub(crate) fn column(&self, col: usize) -> [bool; GLYPH_HEIGHT] {
        let mut out = [false; GLYPH_HEIGHT];
        for (row, cell) in out.iter_mut().enumerate() {
            *cell = self.lit(row, col);
        }
        out
    }

    /// Returns `true` if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    fn lit(&self, row: usize, col: usize) -> bool {
        (self.rows[row] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
    }
}
