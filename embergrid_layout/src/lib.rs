// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embergrid Layout: dense-fill heatmap grids.
//!
//! This crate is the data-shaping core of Embergrid. It takes a sparse list
//! of dated observations plus an inclusive date span and produces a dense,
//! position-addressed cell list for a chosen layout policy:
//!
//! - [`process_layout`]: the dense-fill pass. Exactly one [`Cell`] per date
//!   in the span; missing dates become synthesized empty cells. Coordinates
//!   follow the selected [`LayoutKind`] (calendar weeks, near-square grid,
//!   or a compact single row).
//! - [`regroup_calendar`]: a second pass for calendar-style rendering that
//!   buckets cells into seven-cell weeks and computes contiguous month
//!   [`BoundarySegment`]s for axis labels.
//! - [`measure`]: pixel footprint of a laid-out grid from [`CellMetrics`],
//!   returned as a [`kurbo::Size`].
//!
//! Everything here is pure: no clock, no I/O, no caches. All derived
//! structures are recomputed per call and owned by the caller, so calling
//! any function twice with the same inputs yields structurally identical
//! output.
//!
//! Rendering, gestures, and animation live in host frameworks; this crate
//! never depends on them.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroU32;
//! use embergrid_dates::DateSpan;
//! use embergrid_layout::{LayoutConfig, Observation, process_layout};
//!
//! let observations = vec![
//!     Observation::parse("2024-01-01", 3.0).unwrap(),
//!     Observation::parse("2024-01-02", 7.0).unwrap(),
//!     Observation::parse("2024-01-03", 1.0).unwrap(),
//! ];
//! let span = DateSpan::parse("2024-01-01", "2024-01-05").unwrap();
//! let config = LayoutConfig::default().with_columns(NonZeroU32::new(3).unwrap());
//!
//! let cells = process_layout(&observations, span, &config);
//! assert_eq!(cells.len(), 5);
//! assert_eq!((cells[0].x, cells[0].y, cells[0].value), (0, 0, 3.0));
//! assert!(!cells[0].is_empty());
//! // Dates with no observation are densely filled as empty cells.
//! assert!(cells[3].is_empty() && cells[4].is_empty());
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialization for observations, cells, and layout
//!   configuration.

mod calendar;
mod cell;
mod layout;
mod measure;
mod observation;

pub use calendar::{BoundarySegment, CalendarGrid, DAY_LABELS, WeekRow, regroup_calendar};
pub use cell::{Cell, CellFlags};
pub use layout::{LayoutConfig, LayoutKind, process_layout};
pub use measure::{CellMetrics, measure};
pub use observation::{Metadata, Observation, ValueDomain};
