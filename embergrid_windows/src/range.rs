// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom-range window: caller-chosen step granularity over an interval.

use chrono::{Datelike, Months, NaiveDateTime, Timelike};
use embergrid_color::Palette;
use embergrid_dates::week_of_year;
use embergrid_layout::{CellFlags, ValueDomain};

use crate::sample::{Slot, TimeSample};

/// Step unit for [`custom_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Granularity {
    /// One slot per hour.
    Hour,
    /// One slot per day.
    Day,
    /// One slot per seven days.
    Week,
    /// One slot per calendar month.
    Month,
}

impl Granularity {
    /// The start of the period following `at`.
    fn advance(self, at: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Hour => at.checked_add_signed(chrono::Duration::hours(1)),
            Self::Day => at.checked_add_signed(chrono::Duration::days(1)),
            Self::Week => at.checked_add_signed(chrono::Duration::days(7)),
            Self::Month => at.checked_add_months(Months::new(1)),
        }
    }

    /// Display label for a period starting at `at`.
    fn label(self, at: NaiveDateTime) -> String {
        match self {
            Self::Hour => at.hour().to_string(),
            Self::Day => at.day().to_string(),
            Self::Week => format!("W{}", week_of_year(at.date())),
            Self::Month => at.format("%b").to_string(),
        }
    }
}

/// Walks from `start` to `end` (inclusive) in `granularity` steps,
/// emitting one labeled slot per period.
///
/// Samples are summed into the period containing them; periods with no
/// samples are empty slots with value 0. A reversed interval yields an
/// empty vec, and an empty sample list yields the full run of empty
/// periods.
#[must_use]
pub fn custom_range(
    samples: &[TimeSample],
    start: NaiveDateTime,
    end: NaiveDateTime,
    granularity: Granularity,
    palette: &Palette,
) -> Vec<Slot> {
    if end < start {
        return Vec::new();
    }

    // First pass: period boundaries.
    let mut starts = Vec::new();
    let mut current = start;
    while current <= end {
        starts.push(current);
        match granularity.advance(current) {
            Some(next) => current = next,
            None => break,
        }
    }

    // Second pass: sum each period's samples.
    let mut totals: Vec<Option<f64>> = vec![None; starts.len()];
    for sample in samples {
        if sample.at < start || sample.at > end {
            continue;
        }
        // Periods are ordered; find the last start at or before the sample.
        let index = starts.partition_point(|period| *period <= sample.at);
        if index == 0 {
            continue;
        }
        let slot = &mut totals[index - 1];
        *slot = Some(slot.unwrap_or(0.0) + sample.value);
    }

    let domain = ValueDomain::from_values(totals.iter().flatten().copied());
    starts
        .into_iter()
        .zip(totals)
        .enumerate()
        .map(|(index, (at, total))| {
            let normalized = total.map_or(0.0, |v| domain.normalized(v));
            Slot {
                index: index as u32,
                label: granularity.label(at),
                at,
                value: total.unwrap_or(0.0),
                normalized,
                color: palette.color_for(normalized, total.is_none()),
                flags: if total.is_none() {
                    CellFlags::EMPTY
                } else {
                    CellFlags::empty()
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Granularity, custom_range};
    use crate::sample::TimeSample;
    use embergrid_color::Palette;

    fn at(s: &str) -> chrono::NaiveDateTime {
        TimeSample::parse(s, 0.0).unwrap().at
    }

    #[test]
    fn hourly_steps_emit_numeric_hour_labels() {
        let slots = custom_range(
            &[],
            at("2024-01-01T10:00:00"),
            at("2024-01-01T13:00:00"),
            Granularity::Hour,
            &Palette::default(),
        );
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].label, "10");
        assert_eq!(slots[3].label, "13");
        assert!(slots.iter().all(super::Slot::is_empty));
    }

    #[test]
    fn weekly_steps_use_week_numbers() {
        let slots = custom_range(
            &[],
            at("2024-01-01T00:00:00"),
            at("2024-01-20T00:00:00"),
            Granularity::Week,
            &Palette::default(),
        );
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label, "W1");
        assert_eq!(slots[1].label, "W2");
    }

    #[test]
    fn monthly_steps_use_month_abbreviations() {
        let slots = custom_range(
            &[],
            at("2024-01-15T00:00:00"),
            at("2024-03-15T00:00:00"),
            Granularity::Month,
            &Palette::default(),
        );
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label, "Jan");
        assert_eq!(slots[2].label, "Mar");
    }

    #[test]
    fn samples_sum_into_their_period() {
        let samples = vec![
            TimeSample::parse("2024-01-01T00:10:00", 2.0).unwrap(),
            TimeSample::parse("2024-01-01T00:50:00", 3.0).unwrap(),
            TimeSample::parse("2024-01-01T02:05:00", 7.0).unwrap(),
        ];
        let slots = custom_range(
            &samples,
            at("2024-01-01T00:00:00"),
            at("2024-01-01T03:00:00"),
            Granularity::Hour,
            &Palette::default(),
        );
        assert_eq!(slots[0].value, 5.0);
        assert!(slots[1].is_empty());
        assert_eq!(slots[2].value, 7.0);
        assert_eq!(slots[2].normalized, 1.0);
    }

    #[test]
    fn reversed_interval_is_empty() {
        let slots = custom_range(
            &[],
            at("2024-01-02T00:00:00"),
            at("2024-01-01T00:00:00"),
            Granularity::Day,
            &Palette::default(),
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn out_of_interval_samples_are_ignored() {
        let samples = vec![TimeSample::parse("2024-02-01T00:00:00", 9.0).unwrap()];
        let slots = custom_range(
            &samples,
            at("2024-01-01T00:00:00"),
            at("2024-01-03T00:00:00"),
            Granularity::Day,
            &Palette::default(),
        );
        assert!(slots.iter().all(super::Slot::is_empty));
    }
}
