// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout dispatch: mapping every date in a span to a grid coordinate.

use core::num::NonZeroU32;

use chrono::NaiveDate;
use embergrid_color::PaletteRef;
use embergrid_dates::{DateSpan, day_of_week};
use hashbrown::HashMap;
use log::debug;

use crate::cell::{Cell, CellFlags};
use crate::observation::{Observation, ValueDomain};

/// The coordinate-assignment policy used to place dates on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutKind {
    /// Contribution-calendar shape: a column per week, a row per weekday.
    Calendar,
    /// Near-square grid: `ceil(sqrt(n))` columns unless overridden.
    #[default]
    Grid,
    /// A single row.
    Compact,
}

impl LayoutKind {
    /// Resolves a layout name from configuration.
    ///
    /// Unknown or custom names fall back to [`LayoutKind::Grid`]; the
    /// fallback is logged rather than raised.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "calendar" => Self::Calendar,
            "grid" => Self::Grid,
            "compact" => Self::Compact,
            other => {
                debug!("unknown layout kind {other:?}; falling back to grid");
                Self::Grid
            }
        }
    }
}

/// Configuration for one layout pass.
///
/// Every field has a documented default, so partial configuration merges by
/// construction: start from [`LayoutConfig::default`] and override what the
/// host cares about.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Coordinate policy; defaults to [`LayoutKind::Grid`].
    pub kind: LayoutKind,
    /// Palette reference; defaults to the default preset.
    pub palette: PaletteRef,
    /// Explicit column count for the grid policy (and grid measurement).
    pub columns: Option<NonZeroU32>,
    /// Explicit row count, used by grid measurement only.
    pub rows: Option<NonZeroU32>,
    /// Explicit normalization domain; derived from the observations when
    /// unset.
    pub domain: Option<ValueDomain>,
}

impl LayoutConfig {
    /// Starts from defaults with the given layout kind.
    #[must_use]
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Overrides the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<PaletteRef>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Overrides the grid column count.
    #[must_use]
    pub fn with_columns(mut self, columns: NonZeroU32) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Overrides the normalization domain.
    #[must_use]
    pub fn with_domain(mut self, domain: ValueDomain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Number of grid columns for `total` cells: the explicit override, or
/// `ceil(sqrt(total))`, and never less than 1.
pub(crate) fn grid_columns(columns: Option<NonZeroU32>, total: usize) -> u32 {
    match columns {
        Some(explicit) => explicit.get(),
        None => {
            let root = (total as f64).sqrt().ceil() as u32;
            root.max(1)
        }
    }
}

/// Maps every date in `span` to a positioned, colored cell.
///
/// This is the dense-fill core: the output contains exactly one cell per
/// date in the span, in date order. Dates with no matching observation are
/// synthesized as empty cells with value 0. Duplicate observation dates are
/// not deduplicated; the last one wins. An empty observation list is valid
/// input, and a reversed span yields an empty vec.
///
/// Coordinates per [`LayoutKind`]:
/// - calendar: `x = days_since_span_start / 7`, `y = day_of_week(date)`,
///   with `week`/`day_of_week` echoed on the cell;
/// - grid: `x = i % columns`, `y = i / columns`;
/// - compact: `x = i`, `y = 0`.
#[must_use]
pub fn process_layout(
    observations: &[Observation],
    span: DateSpan,
    config: &LayoutConfig,
) -> Vec<Cell> {
    let palette = config.palette.resolve();
    let domain = config
        .domain
        .unwrap_or_else(|| ValueDomain::from_observations(observations));
    // Last observation for a date wins, per the input contract.
    let lookup: HashMap<NaiveDate, &Observation> = observations
        .iter()
        .map(|observation| (observation.date, observation))
        .collect();
    let columns = grid_columns(config.columns, span.len());

    span.days()
        .enumerate()
        .map(|(index, date)| {
            let observation = lookup.get(&date).copied();
            let value = observation.map_or(0.0, |o| o.value);
            let flags = if observation.is_none() {
                CellFlags::EMPTY
            } else {
                CellFlags::empty()
            };
            let normalized = if observation.is_none() {
                0.0
            } else {
                domain.normalized(value)
            };
            let index = index as u32;
            let (x, y, week, dow) = match config.kind {
                LayoutKind::Calendar => {
                    let week = index / 7;
                    let dow = day_of_week(date);
                    (week, dow, Some(week), Some(dow))
                }
                LayoutKind::Grid => (index % columns, index / columns, None, None),
                LayoutKind::Compact => (index, 0, None, None),
            };
            Cell {
                date,
                value,
                normalized,
                color: palette.color_for(normalized, observation.is_none()),
                flags,
                x,
                y,
                week,
                day_of_week: dow,
                metadata: observation.and_then(|o| o.metadata.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use super::{LayoutConfig, LayoutKind, grid_columns, process_layout};
    use crate::observation::Observation;
    use embergrid_dates::DateSpan;

    fn observations() -> Vec<Observation> {
        vec![
            Observation::parse("2024-01-01", 3.0).unwrap(),
            Observation::parse("2024-01-02", 7.0).unwrap(),
            Observation::parse("2024-01-03", 1.0).unwrap(),
        ]
    }

    fn five_days() -> DateSpan {
        DateSpan::parse("2024-01-01", "2024-01-05").unwrap()
    }

    #[test]
    fn dense_fill_produces_one_cell_per_date() {
        let cells = process_layout(&observations(), five_days(), &LayoutConfig::default());
        assert_eq!(cells.len(), 5);
        for (cell, date) in cells.iter().zip(five_days().days()) {
            assert_eq!(cell.date, date);
        }
        // Observed dates carry their value and are non-empty.
        assert!(!cells[0].is_empty());
        assert_eq!(cells[0].value, 3.0);
        // Missing dates synthesize empty cells with value 0.
        assert!(cells[3].is_empty());
        assert!(cells[4].is_empty());
        assert_eq!(cells[3].value, 0.0);
    }

    #[test]
    fn grid_coordinates_with_explicit_columns() {
        let config = LayoutConfig::default().with_columns(NonZeroU32::new(3).unwrap());
        let cells = process_layout(&observations(), five_days(), &config);
        assert_eq!((cells[0].x, cells[0].y), (0, 0));
        assert_eq!((cells[2].x, cells[2].y), (2, 0));
        assert_eq!((cells[3].x, cells[3].y), (0, 1));
        assert_eq!((cells[4].x, cells[4].y), (1, 1));
    }

    #[test]
    fn grid_columns_default_to_ceil_sqrt() {
        assert_eq!(grid_columns(None, 5), 3);
        assert_eq!(grid_columns(None, 9), 3);
        assert_eq!(grid_columns(None, 10), 4);
        assert_eq!(grid_columns(None, 0), 1);
        assert_eq!(grid_columns(NonZeroU32::new(7), 5), 7);
    }

    #[test]
    fn calendar_coordinates_are_week_by_weekday() {
        let span = DateSpan::parse("2024-01-01", "2024-01-14").unwrap();
        let config = LayoutConfig::new(LayoutKind::Calendar);
        let cells = process_layout(&observations(), span, &config);
        // 2024-01-01 was a Monday.
        assert_eq!((cells[0].x, cells[0].y), (0, 1));
        assert_eq!(cells[0].week, Some(0));
        assert_eq!(cells[0].day_of_week, Some(1));
        // Day 7 starts the second week column.
        assert_eq!(cells[7].x, 1);
        // 2024-01-07 was a Sunday.
        assert_eq!(cells[6].y, 0);
    }

    #[test]
    fn compact_is_a_single_row() {
        let config = LayoutConfig::new(LayoutKind::Compact);
        let cells = process_layout(&observations(), five_days(), &config);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.x, i as u32);
            assert_eq!(cell.y, 0);
        }
    }

    #[test]
    fn empty_observations_and_reversed_spans_are_valid() {
        let cells = process_layout(&[], five_days(), &LayoutConfig::default());
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(super::Cell::is_empty));

        let reversed = DateSpan::parse("2024-01-05", "2024-01-01").unwrap();
        assert!(process_layout(&observations(), reversed, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn duplicate_dates_last_wins() {
        let mut dup = observations();
        dup.push(Observation::parse("2024-01-01", 9.0).unwrap());
        let cells = process_layout(&dup, five_days(), &LayoutConfig::default());
        assert_eq!(cells[0].value, 9.0);
    }

    #[test]
    fn layout_passes_are_idempotent() {
        let config = LayoutConfig::new(LayoutKind::Calendar);
        let first = process_layout(&observations(), five_days(), &config);
        let second = process_layout(&observations(), five_days(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_layout_names_fall_back_to_grid() {
        assert_eq!(LayoutKind::from_name("calendar"), LayoutKind::Calendar);
        assert_eq!(LayoutKind::from_name("compact"), LayoutKind::Compact);
        assert_eq!(LayoutKind::from_name("custom"), LayoutKind::Grid);
        assert_eq!(LayoutKind::from_name(""), LayoutKind::Grid);
    }

    #[test]
    fn metadata_flows_through_to_cells() {
        let mut metadata = crate::observation::Metadata::new();
        metadata.insert("id".to_owned(), "obs-1".to_owned());
        let observations =
            vec![Observation::parse("2024-01-01", 1.0).unwrap().with_metadata(metadata)];
        let cells = process_layout(&observations, five_days(), &LayoutConfig::default());
        assert_eq!(
            cells[0].metadata.as_ref().and_then(|m| m.get("id")).map(String::as_str),
            Some("obs-1")
        );
        assert!(cells[1].metadata.is_none());
    }
}
