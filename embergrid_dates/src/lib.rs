// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embergrid Dates: calendar arithmetic for heatmap layouts.
//!
//! This crate owns the date math that the Embergrid layout crates build on:
//!
//! - [`DateSpan`]: an inclusive start/end pair with day iteration and
//!   membership queries.
//! - [`date_range`]: the ordered sequence of every day between two dates,
//!   inclusive on both ends.
//! - [`day_of_week`] / [`week_of_year`] / [`start_of_week`]: Sunday-first
//!   weekday numbering and the day-of-year-based week index used by
//!   contribution-calendar grids.
//! - [`days_in_month`] / [`is_leap_year`]: leap-aware month lengths.
//! - [`parse_iso`] / [`format_iso`]: strict `YYYY-MM-DD` parsing and
//!   formatting at the data boundary.
//!
//! All functions are pure; nothing here reads a clock. Invalid date text is
//! reported through [`DateParseError`] and never resolved to a silently wrong
//! date. A reversed range (end before start) is valid input and yields an
//! empty sequence rather than an error.
//!
//! ## Minimal example
//!
//! ```rust
//! use embergrid_dates::{DateSpan, date_range, day_of_week, parse_iso};
//!
//! let span = DateSpan::parse("2024-01-01", "2024-01-05").unwrap();
//! assert_eq!(span.len(), 5);
//!
//! let days = date_range(span.start(), span.end());
//! assert_eq!(days.len(), 5);
//!
//! // 2024-01-01 was a Monday; weekdays are numbered Sunday-first.
//! assert_eq!(day_of_week(parse_iso("2024-01-01").unwrap()), 1);
//! ```

use chrono::{Datelike, Duration, NaiveDate};

/// Failure to interpret a string as an ISO-8601 calendar date.
///
/// Raised by [`parse_iso`] and [`DateSpan::parse`]. Callers are expected to
/// treat this as a hard failure of the surrounding operation; there is no
/// fallback date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unparseable ISO-8601 calendar date: {input:?}")]
pub struct DateParseError {
    /// The rejected input text.
    pub input: String,
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`DateParseError`] when the input is not a valid ISO-8601
/// calendar date (bad shape, out-of-range month/day, or a non-existent day
/// such as `2023-02-29`).
pub fn parse_iso(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateParseError {
        input: input.to_owned(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns every day from `start` to `end`, inclusive on both ends.
///
/// A single-day range yields a one-element sequence. A reversed range
/// (`end < start`) yields an empty sequence; it is not an error.
#[must_use]
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Sunday-first weekday index: 0 = Sunday through 6 = Saturday.
#[must_use]
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// 1-indexed week-of-year based on day-of-year and the weekday of Jan 1.
///
/// Week 1 starts on Jan 1 and runs to the first Saturday; subsequent weeks
/// are Sunday-aligned. This matches contribution-calendar grids and is
/// deliberately *not* ISO-8601 week numbering (which can assign Jan 1 to
/// week 52/53 of the previous year).
#[must_use]
pub fn week_of_year(date: NaiveDate) -> u32 {
    let jan1_dow = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .map_or(0, |jan1| jan1.weekday().num_days_from_sunday());
    (date.ordinal0() + jan1_dow) / 7 + 1
}

/// Number of days in the given month, leap-aware.
///
/// `month` is 1-based (1 = January). February reports 29 on leap years and
/// 28 otherwise.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(0, |last| last.day())
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// The Sunday on or before `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(day_of_week(date)))
}

/// The first day of the month containing `date`.
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// An inclusive span of calendar days.
///
/// The span is a plain value: constructing one never fails, and a reversed
/// span (`end < start`) simply behaves as empty. Layout code treats a span
/// as the authority on which dates exist in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    /// Creates a span from `start` to `end`, inclusive.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a span covering exactly one day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Parses both endpoints as strict `YYYY-MM-DD` dates.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] for the first endpoint that fails to
    /// parse.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateParseError> {
        Ok(Self {
            start: parse_iso(start)?,
            end: parse_iso(end)?,
        })
    }

    /// First day of the span.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the span.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, `0` for a reversed span.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        usize::try_from(self.end.signed_duration_since(self.start).num_days() + 1).unwrap_or(0)
    }

    /// Returns `true` if the span covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns `true` if `date` falls within the span.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The `offset`th day of the span (0-based), ignoring the end bound.
    ///
    /// Used by regrouping code to synthesize padding cells past the end of
    /// the data range. Returns `None` only if the date would overflow the
    /// calendar.
    #[must_use]
    pub fn day_at(&self, offset: u64) -> Option<NaiveDate> {
        self.start.checked_add_days(chrono::Days::new(offset))
    }

    /// Iterates the days of the span in order.
    #[must_use]
    pub fn days(&self) -> Days {
        Days {
            next: if self.is_empty() { None } else { Some(self.start) },
            end: self.end,
        }
    }
}

/// Iterator over the days of a [`DateSpan`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = match current.succ_opt() {
            Some(next) if next <= self.end => Some(next),
            _ => None,
        };
        Some(current)
    }
}
