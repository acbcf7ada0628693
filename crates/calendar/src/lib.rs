//! # chalkline-calendar
//!
//! Date arithmetic that turns a rendered [`Grid`](chalkline_glyph::Grid)
//! into the dates a contribution calendar will light up.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year text"] -->|"parse_year()"| B["i32"]
//!     B -->|"anchor_sunday()"| C["NaiveDate (first Sunday)"]
//!     D["Grid"] -->|"map_grid()"| E["DateMapping"]
//!     C --> E
//!     E -->|".dates()"| F["CommitDateSet"]
//!     E -->|".report()"| G["MappingReport"]
//! ```
//!
//! Column `c`, row `r` of the grid maps to `anchor + 7c + r` days. Dates
//! that fall past December 31 are dropped.
//!
//! ## Quick Start
//!
//! ```
//! use chalkline_calendar::{map_grid, parse_year};
//! use chalkline_glyph::rasterize;
//!
//! let year = parse_year("2024").unwrap();
//! let mapping = map_grid(rasterize("HI").grid(), year).unwrap();
//! assert!(!mapping.dates().is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Year parsing and validation |
//! | `anchor` | First-Sunday anchor and cell offsets |
//! | `dates` | Ordered, year-bounded commit date set |
//! | `mapper` | Grid to date mapping with diagnostics |
//! | `error` | Error types |

mod anchor;
mod dates;
mod error;
mod mapper;
mod year;

pub use anchor::{anchor_sunday, cell_date, cell_offset_days};
pub use dates::CommitDateSet;
pub use error::CalendarError;
pub use mapper::{DateMapping, MappingReport, map_grid, map_grid_for};
pub use year::parse_year;
