// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real-time window: a trailing time window ending at an injected "now".
//!
//! This is the only window whose output depends on the current time, so the
//! clock is a parameter: callers pass `now` in, the function stays pure,
//! and tests pin a fixed timestamp. Nothing in this module reads a clock.

use chrono::{Duration, NaiveDateTime};
use embergrid_color::Palette;
use embergrid_layout::{CellFlags, ValueDomain};

use crate::sample::{Slot, TimeSample, clock_label};

/// Configuration for a real-time trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealTimeConfig {
    /// Window length in hours, ending at `now`.
    pub window_hours: u32,
    /// Expected update cadence in seconds; a sample within twice this of
    /// `now` is marked live.
    pub update_interval_secs: u32,
}

impl Default for RealTimeConfig {
    /// A 24-hour window refreshed every 60 seconds.
    fn default() -> Self {
        Self {
            window_hours: 24,
            update_interval_secs: 60,
        }
    }
}

/// The retained tail of a sample stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealTimeLayout {
    /// Start of the trailing window.
    pub window_start: NaiveDateTime,
    /// The injected "now" the window ends at.
    pub now: NaiveDateTime,
    /// Retained samples as slots, oldest first. Unlike the fixed-shape
    /// windows this list is as long as the retained data.
    pub slots: Vec<Slot>,
}

/// Filters `samples` to the trailing window ending at `now` and marks the
/// recent ones live.
///
/// A sample is retained when `window_start <= at <= now` and live when it
/// is within `2 * update_interval_secs` of `now`. Values are normalized
/// over the retained set. An empty (or fully aged-out) sample list yields
/// an empty slot list, never an error.
#[must_use]
pub fn real_time(
    samples: &[TimeSample],
    now: NaiveDateTime,
    config: &RealTimeConfig,
    palette: &Palette,
) -> RealTimeLayout {
    let window_start = now - Duration::hours(i64::from(config.window_hours));
    let live_horizon = i64::from(config.update_interval_secs) * 2;

    let mut retained: Vec<&TimeSample> = samples
        .iter()
        .filter(|sample| window_start <= sample.at && sample.at <= now)
        .collect();
    retained.sort_by_key(|sample| sample.at);

    let domain = ValueDomain::from_values(retained.iter().map(|sample| sample.value));
    let slots = retained
        .into_iter()
        .enumerate()
        .map(|(index, sample)| {
            let age_secs = now.signed_duration_since(sample.at).num_seconds();
            let live = age_secs <= live_horizon;
            let normalized = domain.normalized(sample.value);
            Slot {
                index: index as u32,
                label: clock_label(sample.at),
                at: sample.at,
                value: sample.value,
                normalized,
                color: palette.color_for(normalized, false),
                flags: if live {
                    CellFlags::LIVE
                } else {
                    CellFlags::empty()
                },
            }
        })
        .collect();

    RealTimeLayout {
        window_start,
        now,
        slots,
    }
}
