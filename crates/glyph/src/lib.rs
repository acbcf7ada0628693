//! # chalkline-glyph
//!
//! Fixed 5×7 font and the rasterizer that lays text onto the 7×52
//! contribution-calendar grid.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"rasterize()"| B["Rendered"]
//!     F["FONT"] -->|"lookup()"| G["Glyph"]
//!     G --> B
//!     B -->|".grid()"| C["Grid (7 x 52)"]
//!     B -->|".diagnostics()"| D["Vec of RenderDiagnostic"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chalkline_glyph::{CAPACITY, rasterize};
//!
//! let rendered = rasterize("HI");
//! assert!(rendered.diagnostics().is_empty());
//! assert!(rendered.grid().lit_count() > 0);
//! assert_eq!(CAPACITY, 8);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `font` | Static font table and lookup |
//! | `glyph` | 5×7 glyph bitmap |
//! | `grid` | 7×52 calendar grid |
//! | `raster` | Text placement, truncation and substitution |
//! | `error` | Error types |

mod error;
mod font;
mod glyph;
mod grid;
mod raster;

pub use error::GlyphError;
pub use font::{FONT, lookup};
pub use glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph};
pub use grid::{COLS, Grid, ROWS};
pub use raster::{CAPACITY, RenderDiagnostic, Rendered, SPACING, rasterize};
