// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid cells: one position-addressed unit per date.

use chrono::NaiveDate;
use embergrid_color::{Palette, Rgb};

use crate::observation::Metadata;

bitflags::bitflags! {
    /// Per-cell state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// No observation exists for this cell's date.
        const EMPTY = 1;
        /// The cell pads the grid shape (for example, out-of-month days in
        /// a month grid) and is excluded from data lookups.
        const PADDING = 1 << 1;
        /// The cell's timestamp is recent enough to be considered live in a
        /// real-time window.
        const LIVE = 1 << 2;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// One grid-addressable unit: a single date's value, display color, and
/// integer grid coordinates.
///
/// `x`/`y` are layout-dependent grid coordinates, not pixels; converting to
/// pixels is [`crate::measure`]'s job. `week` and `day_of_week` are only
/// populated by the calendar layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The calendar day this cell represents.
    pub date: NaiveDate,
    /// Observed value, `0.0` for synthesized empty cells.
    pub value: f64,
    /// Value normalized into `[0, 1]` against the layout's domain.
    pub normalized: f64,
    /// Display color resolved through the layout's palette.
    pub color: Rgb,
    /// Cell state.
    pub flags: CellFlags,
    /// Horizontal grid coordinate.
    pub x: u32,
    /// Vertical grid coordinate.
    pub y: u32,
    /// Week index within the range (calendar layout only).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub week: Option<u32>,
    /// Sunday-first weekday index (calendar layout only).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub day_of_week: Option<u32>,
    /// Opaque metadata carried over from the matching observation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<Metadata>,
}

impl Cell {
    /// Synthesizes an empty cell for `date` at the grid origin.
    ///
    /// Dense-fill layouts and week padding both materialize missing dates
    /// through this constructor; callers position the cell afterwards.
    #[must_use]
    pub fn empty_at(date: NaiveDate, palette: &Palette) -> Self {
        Self {
            date,
            value: 0.0,
            normalized: 0.0,
            color: palette.empty(),
            flags: CellFlags::EMPTY,
            x: 0,
            y: 0,
            week: None,
            day_of_week: None,
            metadata: None,
        }
    }

    /// Returns `true` when no observation backs this cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.contains(CellFlags::EMPTY)
    }

    /// Returns `true` when the cell only pads the grid shape.
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.flags.contains(CellFlags::PADDING)
    }

    /// Returns `true` when the cell is live in a real-time window.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.flags.contains(CellFlags::LIVE)
    }
}
