//! Text placement onto the calendar grid.

use std::fmt;

use tracing::debug;

use crate::font::lookup;
use crate::glyph::{GLYPH_WIDTH, Glyph};
use crate::grid::{COLS, Grid};

/// Blank columns inserted after each glyph.
pub const SPACING: usize = 1;

/// Maximum number of characters that fit on the grid.
pub const CAPACITY: usize = COLS / (GLYPH_WIDTH + SPACING);

/// A non-fatal condition corrected during rasterization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDiagnostic {
    /// The input was longer than [`CAPACITY`] and was cut down.
    Truncated {
        /// Length of the input in characters.
        original_len: usize,
        /// Maximum number of characters kept.
        capacity: usize,
        /// The text that was actually rendered.
        kept: String,
    },
    /// A character had no glyph and was rendered as a space.
    UnsupportedChar {
        /// The offending character.
        ch: char,
        /// Character index within the rendered text.
        position: usize,
    },
}

impl fmt::Display for RenderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderDiagnostic::Truncated {
                original_len,
                capacity,
                kept,
            } => write!(
                f,
                "text is too long ({original_len} chars, maximum {capacity}); truncated to {kept:?}"
            ),
            RenderDiagnostic::UnsupportedChar { ch, position } => write!(
                f,
                "character {ch:?} at position {position} not found in font, replaced with space"
            ),
        }
    }
}

/// Output of [`rasterize`]: the grid plus everything that was corrected on
/// the way.
#[derive(Debug, Clone)]
pub struct Rendered {
    grid: Grid,
    text: String,
    diagnostics: Vec<RenderDiagnostic>,
}

impl Rendered {
    /// Returns the rendered grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the result and returns the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns the text that was rendered, after truncation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the non-fatal diagnostics, in the order they were raised.
    pub fn diagnostics(&self) -> &[RenderDiagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the input had to be truncated.
    pub fn was_truncated(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, RenderDiagnostic::Truncated { .. }))
    }
}

/// Renders `text` onto a fresh 7×52 grid.
///
/// Characters are placed left to right from column 0, each glyph taking
/// [`GLYPH_WIDTH`] columns followed by [`SPACING`] blank columns. Input
/// beyond [`CAPACITY`] characters is dropped and characters missing from
/// the font are drawn as spaces; both are reported in
/// [`Rendered::diagnostics`] rather than failing.
pub fn rasterize(text: &str) -> Rendered {
    let mut diagnostics = Vec::new();

    let original_len = text.chars().count();
    let kept: String = text.chars().take(CAPACITY).collect();
    if original_len > CAPACITY {
        diagnostics.push(RenderDiagnostic::Truncated {
            original_len,
            capacity: CAPACITY,
            kept: kept.clone(),
        });
    }

    let mut grid = Grid::new();
    let mut col = 0;
    for (position, ch) in kept.chars().enumerate() {
        let glyph = lookup(ch).unwrap_or_else(|| {
            diagnostics.push(RenderDiagnostic::UnsupportedChar { ch, position });
            Glyph::BLANK
        });
        for x in 0..GLYPH_WIDTH {
            if col >= COLS {
                break;
            }
            grid.set_column(col, glyph.column(x));
            col += 1;
        }
        if col < COLS {
            col += SPACING;
        }
    }

    debug!(
        text = %kept,
        lit = grid.lit_count(),
        n_diagnostics = diagnostics.len(),
        "rasterized text"
    );

    Rendered {
        grid,
        text: kept,
        diagnostics,
    }
}
