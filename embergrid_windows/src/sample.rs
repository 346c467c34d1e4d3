// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamped samples and the labeled slots they bucket into.

use chrono::{NaiveDateTime, Timelike};
use embergrid_color::Rgb;
use embergrid_dates::DateParseError;
use embergrid_layout::{CellFlags, Metadata};

/// One timestamped input value for sub-daily granularities.
///
/// The date-keyed [`embergrid_layout::Observation`] covers whole-day
/// layouts; samples carry a full timestamp for the hourly, scroll, and
/// real-time windows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSample {
    /// When the value was observed.
    pub at: NaiveDateTime,
    /// Raw observed value.
    pub value: f64,
    /// Opaque host metadata, passed through unchanged.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<Metadata>,
}

impl TimeSample {
    /// Creates a sample without metadata.
    #[must_use]
    pub const fn new(at: NaiveDateTime, value: f64) -> Self {
        Self {
            at,
            value,
            metadata: None,
        }
    }

    /// Creates a sample from an ISO-8601 `YYYY-MM-DDTHH:MM:SS` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] when the timestamp does not parse.
    pub fn parse(at: &str, value: f64) -> Result<Self, DateParseError> {
        let at = NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
            DateParseError {
                input: at.to_owned(),
            }
        })?;
        Ok(Self::new(at, value))
    }

    /// Attaches opaque metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// One labeled time slot in a windowed layout.
///
/// Slots are the time-axis analogue of [`embergrid_layout::Cell`]: a dense,
/// index-addressed unit with a resolved display color. The hourly, custom
/// range, and real-time windows all emit slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Position along the window's single axis.
    pub index: u32,
    /// Display label for the slot (hour, day number, `"W<n>"`, …).
    pub label: String,
    /// Start of the time period the slot covers.
    pub at: NaiveDateTime,
    /// Aggregated value for the period, `0.0` when empty.
    pub value: f64,
    /// Value normalized into `[0, 1]` against the window's domain.
    pub normalized: f64,
    /// Display color resolved through the window's palette.
    pub color: Rgb,
    /// Slot state; `EMPTY` when no sample landed in the period, `LIVE` in
    /// real-time windows.
    pub flags: CellFlags,
}

impl Slot {
    /// Returns `true` when no sample backs this slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.contains(CellFlags::EMPTY)
    }

    /// Returns `true` when the slot is live in a real-time window.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.flags.contains(CellFlags::LIVE)
    }
}

/// Hour label style for the daily window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClockFormat {
    /// `12 AM` … `11 PM`.
    #[default]
    TwelveHour,
    /// `00:00` … `23:00`.
    TwentyFourHour,
}

impl ClockFormat {
    /// Formats an hour-of-day (0–23) in this clock style.
    #[must_use]
    pub fn hour_label(self, hour: u32) -> String {
        match self {
            Self::TwentyFourHour => format!("{hour:02}:00"),
            Self::TwelveHour => {
                let meridiem = if hour < 12 { "AM" } else { "PM" };
                let display = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{display} {meridiem}")
            }
        }
    }
}

/// Formats a timestamp's clock time for real-time slot labels.
pub(crate) fn clock_label(at: NaiveDateTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}
