// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monthly window: a week-of-month grid with out-of-month padding.

use chrono::{Duration, NaiveDate};
use embergrid_color::Palette;
use embergrid_dates::{day_of_week, days_in_month};
use embergrid_layout::{Cell, CellFlags, Observation, ValueDomain};
use hashbrown::HashMap;
use log::debug;

/// One month as a weekday-by-week grid.
///
/// The grid is rectangular: `rows * 7` cells, where leading and trailing
/// out-of-month positions are padding cells (flagged `PADDING | EMPTY`,
/// dated into the adjacent months, excluded from data lookups).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthLayout {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-based.
    pub month: u32,
    /// Days in the month, leap-aware.
    pub days_in_month: u32,
    /// Number of week rows: `ceil((days_in_month + first_weekday) / 7)`.
    pub rows: u32,
    /// `rows * 7` cells in row-major order; `x` is the weekday column and
    /// `y` the week-of-month row.
    pub cells: Vec<Cell>,
}

/// Lays out one calendar month as a week-of-month grid.
///
/// An out-of-range `month` is clamped into 1–12 (logged, not raised).
/// Empty observation lists are valid and produce an all-empty month.
#[must_use]
pub fn monthly(
    observations: &[Observation],
    year: i32,
    month: u32,
    palette: &Palette,
) -> MonthLayout {
    let month = if (1..=12).contains(&month) {
        month
    } else {
        debug!("month {month} out of range; clamping");
        month.clamp(1, 12)
    };
    let day_count = days_in_month(year, month);
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let first_weekday = first.map_or(0, day_of_week);
    let rows = (day_count + first_weekday).div_ceil(7);

    let lookup: HashMap<NaiveDate, f64> = observations
        .iter()
        .map(|observation| (observation.date, observation.value))
        .collect();
    let in_month = |date: NaiveDate| -> Option<f64> { lookup.get(&date).copied() };
    let domain = ValueDomain::from_observations(observations);

    let mut cells = Vec::with_capacity((rows * 7) as usize);
    for index in 0..rows * 7 {
        let day_number = index as i64 - i64::from(first_weekday) + 1;
        let date = first
            .map(|f| f + Duration::days(day_number - 1))
            .unwrap_or(NaiveDate::MIN);
        let padding = day_number < 1 || day_number > i64::from(day_count);
        let value = if padding { None } else { in_month(date) };
        let normalized = value.map_or(0.0, |v| domain.normalized(v));
        let mut cell = Cell::empty_at(date, palette);
        cell.x = index % 7;
        cell.y = index / 7;
        if padding {
            cell.flags = CellFlags::EMPTY | CellFlags::PADDING;
        } else if let Some(value) = value {
            cell.value = value;
            cell.normalized = normalized;
            cell.color = palette.color_for(normalized, false);
            cell.flags = CellFlags::empty();
        }
        cells.push(cell);
    }

    MonthLayout {
        year,
        month,
        days_in_month: day_count,
        rows,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::monthly;
    use embergrid_color::Palette;
    use embergrid_layout::{Cell, Observation};

    #[test]
    fn leap_february_has_twenty_nine_days() {
        let layout = monthly(&[], 2024, 2, &Palette::default());
        assert_eq!(layout.days_in_month, 29);
        let layout = monthly(&[], 2023, 2, &Palette::default());
        assert_eq!(layout.days_in_month, 28);
    }

    #[test]
    fn grid_is_rectangular_with_computed_rows() {
        // Feb 2024 starts on a Thursday (weekday 4): ceil((29+4)/7) = 5.
        let layout = monthly(&[], 2024, 2, &Palette::default());
        assert_eq!(layout.rows, 5);
        assert_eq!(layout.cells.len(), 35);
        // June 2024 starts on a Saturday: ceil((30+6)/7) = 6 rows.
        let layout = monthly(&[], 2024, 6, &Palette::default());
        assert_eq!(layout.rows, 6);
        assert_eq!(layout.cells.len(), 42);
    }

    #[test]
    fn out_of_month_cells_are_padding_and_skip_lookups() {
        // An observation dated on a padding cell's date must not color it.
        let observations = vec![Observation::parse("2024-01-31", 9.0).unwrap()];
        let layout = monthly(&observations, 2024, 2, &Palette::default());
        // Feb 2024 starts Thursday: cells 0..4 pad backward into January.
        let pad = &layout.cells[3];
        assert!(pad.is_padding());
        assert!(pad.is_empty());
        assert_eq!(pad.value, 0.0);
    }

    #[test]
    fn in_month_observations_land_on_their_day() {
        let observations = vec![Observation::parse("2024-02-01", 5.0).unwrap()];
        let layout = monthly(&observations, 2024, 2, &Palette::default());
        // Feb 1 2024 sits at weekday column 4 of row 0.
        let cell = &layout.cells[4];
        assert_eq!(cell.value, 5.0);
        assert!(!cell.is_empty());
        assert_eq!((cell.x, cell.y), (4, 0));
    }

    #[test]
    fn empty_input_fills_the_whole_grid_with_empty_cells() {
        let layout = monthly(&[], 2024, 2, &Palette::default());
        assert!(layout.cells.iter().all(Cell::is_empty));
    }

    #[test]
    fn out_of_range_month_clamps() {
        let layout = monthly(&[], 2024, 13, &Palette::default());
        assert_eq!(layout.month, 12);
        assert_eq!(layout.days_in_month, 31);
    }
}
