// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel measurement for laid-out grids.

use kurbo::Size;

use crate::layout::{LayoutConfig, LayoutKind, grid_columns};

/// Cell sizing in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMetrics {
    /// Side length of one square cell.
    pub size: f64,
    /// Gap between adjacent cells.
    pub spacing: f64,
}

impl CellMetrics {
    /// Creates cell metrics.
    #[must_use]
    pub const fn new(size: f64, spacing: f64) -> Self {
        Self { size, spacing }
    }

    /// Extent of `count` cells along one axis:
    /// `count * (size + spacing) - spacing`, `0` for an empty axis.
    #[must_use]
    pub fn extent(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        count as f64 * (self.size + self.spacing) - self.spacing
    }
}

impl Default for CellMetrics {
    /// 12px cells with 2px gaps, the usual contribution-calendar scale.
    fn default() -> Self {
        Self {
            size: 12.0,
            spacing: 2.0,
        }
    }
}

/// Measures the pixel footprint of `cell_count` cells laid out per
/// `config`.
///
/// Axis counts per kind:
/// - calendar: `ceil(count / 7)` week columns × 7 weekday rows;
/// - grid: explicit `config.columns`/`config.rows` or the computed
///   `ceil(sqrt(count))` columns and the rows needed to hold the rest;
/// - compact: `count` × 1.
#[must_use]
pub fn measure(config: &LayoutConfig, cell_count: usize, metrics: CellMetrics) -> Size {
    let (columns, rows) = match config.kind {
        LayoutKind::Calendar => (cell_count.div_ceil(7), if cell_count == 0 { 0 } else { 7 }),
        LayoutKind::Compact => (cell_count, usize::from(cell_count > 0)),
        LayoutKind::Grid => {
            let columns = grid_columns(config.columns, cell_count) as usize;
            let rows = match config.rows {
                Some(explicit) => explicit.get() as usize,
                None => cell_count.div_ceil(columns),
            };
            if cell_count == 0 {
                (0, 0)
            } else {
                (columns, rows)
            }
        }
    };
    Size::new(metrics.extent(columns), metrics.extent(rows))
}
