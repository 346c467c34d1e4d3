// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embergrid Windows: time-windowed heatmap layout variants.
//!
//! Each variant applies the same dense-fill and boundary-labeling pattern
//! as [`embergrid_layout`], at a different time granularity:
//!
//! - [`daily`]: 24 hourly [`Slot`]s for one target date, labeled in
//!   12-hour or 24-hour form per [`ClockFormat`].
//! - [`weekly`]: 7 day cells anchored to the start of the week containing a
//!   target date.
//! - [`monthly`]: a week-of-month grid with out-of-month padding cells.
//! - [`yearly`]: 12 months laid out via the monthly policy, with labels on
//!   a fixed stride.
//! - [`custom_range`]: one labeled period per [`Granularity`] step across a
//!   caller-chosen interval.
//! - [`timeline_scroll`]: fixed-size pages of a date-sorted cell strip for
//!   scroll virtualization.
//! - [`real_time`]: a trailing window ending at an *injected* `now`, with
//!   recent samples marked live.
//!
//! Every variant accepts an empty input list and returns its full
//! fixed-size slot structure (24 hours, 7 days, …) filled with empty
//! slots. All functions are pure; the real-time variant takes the current
//! time as a parameter precisely so it stays that way.
//!
//! ## Minimal example
//!
//! ```rust
//! use embergrid_color::Palette;
//! use embergrid_windows::{ClockFormat, TimeSample, daily};
//!
//! let samples = vec![TimeSample::parse("2024-01-01T09:30:00", 4.0).unwrap()];
//! let day = samples[0].at.date();
//!
//! let layout = daily(&samples, day, ClockFormat::TwelveHour, &Palette::default());
//! assert_eq!(layout.slots.len(), 24);
//! assert_eq!(layout.slots[9].label, "9 AM");
//! assert!(!layout.slots[9].is_empty());
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialization for samples, slots, and window layouts.

mod daily;
mod live;
mod monthly;
mod range;
mod sample;
mod scroll;
mod weekly;
mod yearly;

pub use daily::{DayLayout, daily};
pub use live::{RealTimeConfig, RealTimeLayout, real_time};
pub use monthly::{MonthLayout, monthly};
pub use range::{Granularity, custom_range};
pub use sample::{ClockFormat, Slot, TimeSample};
pub use scroll::{ScrollChunk, timeline_scroll};
pub use weekly::{WeekLayout, weekly};
pub use yearly::{MONTH_LABEL_STRIDE, YearLayout, yearly};
