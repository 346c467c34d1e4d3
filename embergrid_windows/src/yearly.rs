// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Yearly window: twelve months of week-of-month grids.

use embergrid_color::Palette;
use embergrid_layout::{BoundarySegment, Observation};

use crate::monthly::{MonthLayout, monthly};

/// Nominal label stride, in week columns, between month labels on the
/// yearly axis. Month grids vary between 4 and 6 week rows; labels sit on
/// a fixed grid instead of tracking that variation.
pub const MONTH_LABEL_STRIDE: u32 = 5;

/// A year of months, each laid out via the monthly policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearLayout {
    /// Calendar year.
    pub year: i32,
    /// Twelve months, January first.
    pub months: Vec<MonthLayout>,
    /// Month labels spaced at [`MONTH_LABEL_STRIDE`] week columns.
    pub labels: Vec<BoundarySegment>,
}

impl YearLayout {
    /// Flattens the year into one cell sequence, January first, row-major
    /// within each month.
    pub fn cells(&self) -> impl Iterator<Item = &embergrid_layout::Cell> {
        self.months.iter().flat_map(|month| month.cells.iter())
    }
}

/// Lays out a whole year as twelve monthly grids.
///
/// Each month is produced by [`monthly`] (so padding and lookup rules
/// match), and label segments are emitted on the fixed
/// [`MONTH_LABEL_STRIDE`] grid. An empty observation list yields twelve
/// all-empty months.
#[must_use]
pub fn yearly(observations: &[Observation], year: i32, palette: &Palette) -> YearLayout {
    let months: Vec<MonthLayout> = (1..=12)
        .map(|month| monthly(observations, year, month, palette))
        .collect();
    let labels = months
        .iter()
        .enumerate()
        .map(|(index, month)| BoundarySegment {
            label: month_abbrev(month.month),
            start: index as u32 * MONTH_LABEL_STRIDE,
            span: MONTH_LABEL_STRIDE,
        })
        .collect();
    YearLayout {
        year,
        months,
        labels,
    }
}

fn month_abbrev(month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(2000, month, 1)
        .map_or_else(String::new, |date| date.format("%b").to_string())
}
