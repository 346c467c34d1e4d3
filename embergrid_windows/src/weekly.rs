// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weekly window: seven day slots anchored to a week start.

use chrono::NaiveDate;
use embergrid_color::Palette;
use embergrid_dates::{DateSpan, start_of_week};
use embergrid_layout::{Cell, LayoutConfig, LayoutKind, process_layout};

/// One week of day cells, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekLayout {
    /// The Sunday the week starts on.
    pub start: NaiveDate,
    /// Exactly seven cells in weekday order.
    pub cells: Vec<Cell>,
}

/// Lays out the week containing `anchor` as seven day slots.
///
/// The window is anchored at [`start_of_week`]\(`anchor`\), so any date
/// within a week produces the same layout. Days without observations are
/// dense-filled as empty cells; an empty observation list yields seven
/// empty cells.
#[must_use]
pub fn weekly(
    observations: &[embergrid_layout::Observation],
    anchor: NaiveDate,
    palette: &Palette,
) -> WeekLayout {
    let start = start_of_week(anchor);
    let span = DateSpan::new(start, start + chrono::Duration::days(6));
    let config = LayoutConfig::new(LayoutKind::Compact)
        .with_palette(palette.clone());
    let mut cells = process_layout(observations, span, &config);
    for cell in &mut cells {
        cell.day_of_week = Some(cell.x);
    }
    WeekLayout { start, cells }
}
