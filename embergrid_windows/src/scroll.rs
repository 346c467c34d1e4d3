// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline scroll window: fixed-size pages for scroll virtualization.
//!
//! Hosts virtualizing a long heatmap strip realize one page of cells at a
//! time and need a marker per page for the scroll bar. This module chunks a
//! cell list into such pages; deciding which page is visible is the host's
//! scroll-state problem, not ours.

use core::num::NonZeroUsize;

use chrono::NaiveDate;
use embergrid_layout::Cell;

/// One fixed-size page of a date-sorted cell strip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollChunk {
    /// Page index, starting at 0.
    pub index: u32,
    /// Date of the page's first cell, the marker timestamp.
    pub start: NaiveDate,
    /// Short display label for the marker ("Jan 5").
    pub label: String,
    /// The page's cells, in date order. Every page except possibly the
    /// last holds exactly `chunk_size` cells.
    pub cells: Vec<Cell>,
}

/// Chunks `cells` into fixed-size pages in date order.
///
/// The input need not be sorted; pages are built over a date-sorted copy.
/// `chunk_size` is non-zero by construction. An empty cell list yields no
/// pages.
#[must_use]
pub fn timeline_scroll(cells: &[Cell], chunk_size: NonZeroUsize) -> Vec<ScrollChunk> {
    let mut sorted = cells.to_vec();
    sorted.sort_by_key(|cell| cell.date);

    sorted
        .chunks(chunk_size.get())
        .enumerate()
        .filter_map(|(index, page)| {
            let first = page.first()?;
            Some(ScrollChunk {
                index: index as u32,
                start: first.date,
                label: marker_label(first.date),
                cells: page.to_vec(),
            })
        })
        .collect()
}

fn marker_label(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{} {}", date.format("%b"), date.day())
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::timeline_scroll;
    use embergrid_dates::DateSpan;
    use embergrid_layout::{LayoutConfig, process_layout};

    fn cells(start: &str, end: &str) -> Vec<embergrid_layout::Cell> {
        let span = DateSpan::parse(start, end).unwrap();
        process_layout(&[], span, &LayoutConfig::default())
    }

    #[test]
    fn pages_are_fixed_size_with_a_short_tail() {
        let cells = cells("2024-01-01", "2024-01-10");
        let chunks = timeline_scroll(&cells, NonZeroUsize::new(4).unwrap());
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].cells.len(), 4);
        assert_eq!(chunks[1].cells.len(), 4);
        assert_eq!(chunks[2].cells.len(), 2);
    }

    #[test]
    fn markers_carry_the_pages_first_date_and_label() {
        let cells = cells("2024-01-01", "2024-01-10");
        let chunks = timeline_scroll(&cells, NonZeroUsize::new(4).unwrap());
        assert_eq!(chunks[0].label, "Jan 1");
        assert_eq!(chunks[1].label, "Jan 5");
        assert_eq!(
            embergrid_dates::format_iso(chunks[2].start),
            "2024-01-09"
        );
        assert_eq!(chunks[2].index, 2);
    }

    #[test]
    fn unsorted_input_is_paged_in_date_order() {
        let mut shuffled = cells("2024-01-01", "2024-01-06");
        shuffled.reverse();
        let chunks = timeline_scroll(&shuffled, NonZeroUsize::new(3).unwrap());
        assert_eq!(chunks[0].label, "Jan 1");
        assert_eq!(chunks[0].cells[0].date, chunks[0].start);
    }

    #[test]
    fn empty_input_yields_no_pages() {
        let chunks = timeline_scroll(&[], NonZeroUsize::new(5).unwrap());
        assert!(chunks.is_empty());
    }
}
