// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daily window: 24 hourly slots for one target date.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use embergrid_color::Palette;
use embergrid_layout::{CellFlags, ValueDomain};
use hashbrown::HashMap;

use crate::sample::{ClockFormat, Slot, TimeSample};

/// One day bucketed into 24 hourly slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayLayout {
    /// The target date.
    pub day: NaiveDate,
    /// Exactly 24 slots, hour 0 through hour 23.
    pub slots: Vec<Slot>,
}

/// Buckets `samples` falling on `day` into 24 hourly slots.
///
/// Hours with no sample are synthesized as empty slots with value 0, so the
/// result always has exactly 24 entries, including for an empty sample
/// list. Multiple samples in the same hour: the last one wins, matching the
/// observation-map policy. Labels follow `clock`.
#[must_use]
pub fn daily(
    samples: &[TimeSample],
    day: NaiveDate,
    clock: ClockFormat,
    palette: &Palette,
) -> DayLayout {
    let mut by_hour: HashMap<u32, f64> = HashMap::new();
    for sample in samples {
        if sample.at.date() == day {
            by_hour.insert(sample.at.hour(), sample.value);
        }
    }
    let domain = ValueDomain::from_values(by_hour.values().copied());

    let slots = (0..24)
        .map(|hour| {
            let value = by_hour.get(&hour).copied();
            let normalized = value.map_or(0.0, |v| domain.normalized(v));
            let at = hour_start(day, hour);
            Slot {
                index: hour,
                label: clock.hour_label(hour),
                at,
                value: value.unwrap_or(0.0),
                normalized,
                color: palette.color_for(normalized, value.is_none()),
                flags: if value.is_none() {
                    CellFlags::EMPTY
                } else {
                    CellFlags::empty()
                },
            }
        })
        .collect();

    DayLayout { day, slots }
}

fn hour_start(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0)
        .unwrap_or_else(|| day.and_time(chrono::NaiveTime::MIN))
}
