// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar regrouping: week buckets and month boundary segments.
//!
//! The calendar layout produces a flat, date-ordered cell list. Label
//! rendering wants that list regrouped by week, with every week exactly
//! seven cells wide, plus a set of contiguous month segments over the week
//! axis. [`regroup_calendar`] does both in one pass over the cells.

use chrono::Datelike;
use embergrid_color::Palette;
use embergrid_dates::DateSpan;
use smallvec::SmallVec;

use crate::cell::Cell;

/// Weekday labels for the calendar row axis, Sunday-first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One week bucket: exactly seven cells, padded with synthesized empty
/// cells where the span does not cover a full week.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekRow {
    /// Week index within the range, starting at 0.
    pub index: u32,
    /// The week's cells, Sunday-slot first in span order.
    pub cells: SmallVec<[Cell; 7]>,
}

/// A labeled contiguous run of weeks belonging to one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundarySegment {
    /// Display label, a three-letter month abbreviation.
    pub label: String,
    /// First week index covered by the segment.
    pub start: u32,
    /// Number of weeks covered; always at least 1.
    pub span: u32,
}

/// A calendar-layout cell list regrouped for label rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarGrid {
    /// Week buckets in order; every bucket holds exactly seven cells.
    pub weeks: Vec<WeekRow>,
    /// Month boundary segments. Contiguous, non-overlapping, and jointly
    /// covering every week index.
    pub months: Vec<BoundarySegment>,
}

/// Regroups a calendar-layout cell list into week buckets and month
/// boundary segments.
///
/// `cells` must come from [`crate::process_layout`] with
/// [`crate::LayoutKind::Calendar`] over `span`: dense and date-ordered.
/// Weeks shorter than seven cells (the trailing partial week) are padded
/// with synthesized empty cells at `span.start + week * 7 + day_offset`.
///
/// A month segment closes whenever the first day of a week lands in a new
/// calendar month, and at the final week. Segment labels name the month the
/// segment opened in.
#[must_use]
pub fn regroup_calendar(cells: &[Cell], span: DateSpan, palette: &Palette) -> CalendarGrid {
    if cells.is_empty() {
        return CalendarGrid {
            weeks: Vec::new(),
            months: Vec::new(),
        };
    }

    let mut weeks = Vec::with_capacity(cells.len().div_ceil(7));
    for (week_index, chunk) in cells.chunks(7).enumerate() {
        let mut bucket: SmallVec<[Cell; 7]> = chunk.iter().cloned().collect();
        // Pad the trailing partial week out to seven synthesized cells.
        for day_offset in chunk.len()..7 {
            let offset = week_index as u64 * 7 + day_offset as u64;
            let Some(date) = span.day_at(offset) else {
                break;
            };
            let mut cell = Cell::empty_at(date, palette);
            cell.x = week_index as u32;
            cell.y = day_offset as u32;
            cell.week = Some(week_index as u32);
            cell.day_of_week = Some(day_offset as u32);
            bucket.push(cell);
        }
        weeks.push(WeekRow {
            index: week_index as u32,
            cells: bucket,
        });
    }

    let months = month_segments(&weeks);
    CalendarGrid { weeks, months }
}

/// Scans week buckets in order and closes a segment at each month change.
fn month_segments(weeks: &[WeekRow]) -> Vec<BoundarySegment> {
    let mut segments = Vec::new();
    let mut open: Option<(i32, u32, u32)> = None; // (year, month, start week)

    for week in weeks {
        let Some(first) = week.cells.first() else {
            continue;
        };
        let key = (first.date.year(), first.date.month());
        match open {
            None => open = Some((key.0, key.1, week.index)),
            Some((year, month, start)) if (year, month) != key => {
                segments.push(BoundarySegment {
                    label: label_for(year, month),
                    start,
                    span: week.index - start,
                });
                open = Some((key.0, key.1, week.index));
            }
            Some(_) => {}
        }
    }

    if let Some((year, month, start)) = open {
        let last_week = weeks.last().map_or(start, |week| week.index);
        segments.push(BoundarySegment {
            label: label_for(year, month),
            start,
            span: last_week - start + 1,
        });
    }
    segments
}

fn label_for(year: i32, month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(String::new, |date| date.format("%b").to_string())
}

#[cfg(test)]
mod tests {
    use super::{DAY_LABELS, regroup_calendar};
    use crate::layout::{LayoutConfig, LayoutKind, process_layout};
    use crate::observation::Observation;
    use embergrid_color::Palette;
    use embergrid_dates::DateSpan;

    fn grid_for(span: DateSpan) -> super::CalendarGrid {
        let observations = vec![Observation::parse("2024-01-10", 4.0).unwrap()];
        let cells = process_layout(&observations, span, &LayoutConfig::new(LayoutKind::Calendar));
        regroup_calendar(&cells, span, &Palette::default())
    }

    #[test]
    fn every_week_has_exactly_seven_cells() {
        let span = DateSpan::parse("2024-01-01", "2024-02-15").unwrap();
        let grid = grid_for(span);
        assert_eq!(grid.weeks.len(), span.len().div_ceil(7));
        for week in &grid.weeks {
            assert_eq!(week.cells.len(), 7, "week {} is short", week.index);
        }
    }

    #[test]
    fn padding_cells_continue_the_date_sequence() {
        // Ten days: the second week gets three real cells and four pads.
        let span = DateSpan::parse("2024-01-01", "2024-01-10").unwrap();
        let grid = grid_for(span);
        assert_eq!(grid.weeks.len(), 2);
        let second = &grid.weeks[1];
        assert!(second.cells[3].is_empty());
        // Pad dates walk past the span end: start + 1*7 + 3 = Jan 11.
        assert_eq!(
            embergrid_dates::format_iso(second.cells[3].date),
            "2024-01-11"
        );
        assert_eq!(second.cells[3].week, Some(1));
        assert_eq!(second.cells[3].day_of_week, Some(3));
    }

    #[test]
    fn month_segments_partition_the_week_axis() {
        let span = DateSpan::parse("2024-01-01", "2024-03-20").unwrap();
        let grid = grid_for(span);
        let segments = &grid.months;
        assert!(segments.len() >= 2, "expected multiple month segments");

        // Contiguous, non-overlapping, and jointly covering 0..=max_week.
        assert_eq!(segments[0].start, 0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].start + pair[0].span, pair[1].start);
        }
        let last = &segments[segments.len() - 1];
        let max_week = grid.weeks.len() as u32 - 1;
        assert_eq!(last.start + last.span, max_week + 1);
        for segment in segments {
            assert!(segment.span >= 1);
        }
    }

    #[test]
    fn month_segment_labels_follow_the_weeks_first_day() {
        let span = DateSpan::parse("2024-01-01", "2024-02-15").unwrap();
        let grid = grid_for(span);
        assert_eq!(grid.months[0].label, "Jan");
        assert_eq!(grid.months[1].label, "Feb");
    }

    #[test]
    fn single_week_range_yields_one_segment() {
        let span = DateSpan::parse("2024-01-01", "2024-01-03").unwrap();
        let grid = grid_for(span);
        assert_eq!(grid.weeks.len(), 1);
        assert_eq!(grid.months.len(), 1);
        assert_eq!(grid.months[0].start, 0);
        assert_eq!(grid.months[0].span, 1);
    }

    #[test]
    fn empty_input_regroups_to_nothing() {
        let span = DateSpan::parse("2024-01-05", "2024-01-01").unwrap();
        let grid = regroup_calendar(&[], span, &Palette::default());
        assert!(grid.weeks.is_empty());
        assert!(grid.months.is_empty());
    }

    #[test]
    fn day_labels_are_sunday_first() {
        assert_eq!(DAY_LABELS[0], "Sun");
        assert_eq!(DAY_LABELS[6], "Sat");
    }
}
