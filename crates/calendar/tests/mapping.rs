use chalkline_calendar::{
    CalendarError, anchor_sunday, cell_date, map_grid, map_grid_for, parse_year,
};
use chalkline_glyph::{COLS, Grid, ROWS, lookup, rasterize};
use chrono::{Datelike, Days, NaiveDate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn letter_a_in_2024() {
    let mapping = map_grid_for(rasterize("A").grid(), "2024").unwrap();
    let anchor = mapping.anchor();
    assert_eq!(anchor, ymd(2024, 1, 7));

    let a = lookup('A').unwrap();
    let mut expected = Vec::new();
    for col in 0..5 {
        for row in 0..ROWS {
            if a.pixel(row, col).unwrap() {
                expected.push(anchor + Days::new((7 * col + row) as u64));
            }
        }
    }

    let dates = mapping.dates().dates();
    assert_eq!(dates, expected.as_slice());
    assert_eq!(dates.len(), 18);
    let last_allowed = anchor + Days::new(34);
    for d in dates {
        assert_eq!(d.year(), 2024);
        assert!(*d >= anchor && *d <= last_allowed, "{d} outside glyph span");
    }
}

#[test]
fn every_cell_maps_to_anchor_plus_offset() {
    for year in [2019, 2020, 2023, 2024, 2025, 2026] {
        let full = Grid::from_fn(|_, _| true);
        let mapping = map_grid(&full, year).unwrap();
        let anchor = anchor_sunday(year).unwrap();

        let mut expected = Vec::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let date = anchor + Days::new((7 * col + row) as u64);
                assert_eq!(cell_date(anchor, row, col), Some(date));
                if date.year() == year {
                    expected.push(date);
                }
            }
        }
        assert_eq!(mapping.dates().dates(), expected.as_slice(), "year {year}");
        assert_eq!(
            mapping.report().mapped + mapping.report().dropped,
            ROWS * COLS
        );
    }
}

#[test]
fn late_december_spillover_is_dropped() {
    let last_column = Grid::from_fn(|_, col| col == COLS - 1);
    let mapping = map_grid(&last_column, 2024).unwrap();
    assert_eq!(
        mapping.dates().dates(),
        &[ymd(2024, 12, 29), ymd(2024, 12, 30), ymd(2024, 12, 31)]
    );
    assert_eq!(mapping.report().dropped, 4);
}

#[test]
fn no_spillover_when_year_starts_on_sunday() {
    let last_column = Grid::from_fn(|_, col| col == COLS - 1);
    let mapping = map_grid(&last_column, 2023).unwrap();
    assert_eq!(mapping.dates().len(), ROWS);
    assert_eq!(mapping.report().dropped, 0);
}

#[test]
fn nothing_maps_before_january_first() {
    for year in 1990..=2040 {
        let full = Grid::from_fn(|_, _| true);
        let mapping = map_grid(&full, year).unwrap();
        let first = mapping.dates().dates()[0];
        assert!(first >= ymd(year, 1, 1), "year {year}: {first}");
    }
}

#[test]
fn dates_are_chronological() {
    let mapping = map_grid(rasterize("CHALK!").grid(), 2025).unwrap();
    let dates = mapping.dates().dates();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn mapping_is_pure() {
    let a = map_grid_for(rasterize("AB").grid(), "2024").unwrap();
    let b = map_grid_for(rasterize("AB").grid(), "2024").unwrap();
    assert_eq!(a.dates(), b.dates());
}

#[test]
fn non_numeric_year_is_rejected() {
    let err = map_grid_for(rasterize("A").grid(), "abc").unwrap_err();
    assert_eq!(
        err,
        CalendarError::InvalidYear {
            input: "abc".to_string()
        }
    );
}

#[test]
fn blank_grid_reports_no_active_cells() {
    let mapping = map_grid(rasterize("~ ~").grid(), 2024).unwrap();
    assert!(mapping.is_empty());
    assert!(!mapping.report().has_active_cells());
    assert_eq!((mapping.report().rows, mapping.report().cols), (7, 52));
}

#[test]
fn parse_then_map_matches_direct() {
    let grid = rasterize("HI").into_grid();
    let year = parse_year(" 2026 ").unwrap();
    assert_eq!(
        map_grid(&grid, year).unwrap().dates(),
        map_grid_for(&grid, "2026").unwrap().dates()
    );
}
