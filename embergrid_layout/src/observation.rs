// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input observations and the value domain they normalize against.

use chrono::NaiveDate;
use embergrid_color::normalize;
use embergrid_dates::{DateParseError, parse_iso};

/// Opaque per-observation metadata.
///
/// The layout core never inspects this map; it is cloned through to the
/// produced cells unchanged so rendering hosts can hang tooltips or
/// identifiers off individual observations.
pub type Metadata = hashbrown::HashMap<String, String>;

/// One dated input value.
///
/// Dates are expected to be unique per observation list but are not
/// deduplicated: when a lookup map is built from the list, the last
/// observation for a date wins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Calendar day the value was observed on.
    pub date: NaiveDate,
    /// Raw observed value.
    pub value: f64,
    /// Opaque host metadata, passed through to the produced cell.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<Metadata>,
}

impl Observation {
    /// Creates an observation without metadata.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            metadata: None,
        }
    }

    /// Creates an observation from an ISO-8601 date string.
    ///
    /// # Errors
    ///
    /// Returns [`DateParseError`] when `date` is not a valid `YYYY-MM-DD`
    /// calendar date.
    pub fn parse(date: &str, value: f64) -> Result<Self, DateParseError> {
        Ok(Self::new(parse_iso(date)?, value))
    }

    /// Attaches opaque metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// The `[min, max]` domain observation values normalize against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueDomain {
    /// Lower bound; values at or below it normalize to 0.
    pub min: f64,
    /// Upper bound; values at or above it normalize to 1.
    pub max: f64,
}

impl ValueDomain {
    /// Creates an explicit domain.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Derives the domain from a set of observations.
    ///
    /// Heatmap ramps scale from zero, so `min` is the smaller of `0` and the
    /// smallest observed value; `max` is the largest observed value. An
    /// empty list yields the degenerate `[0, 0]` domain, which
    /// [`normalize`] resolves without dividing by zero.
    #[must_use]
    pub fn from_observations(observations: &[Observation]) -> Self {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for observation in observations {
            min = min.min(observation.value);
            max = max.max(observation.value);
        }
        Self { min, max }
    }

    /// Derives the domain from bare slot values, with the same
    /// scale-from-zero policy as [`ValueDomain::from_observations`].
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        Self { min, max }
    }

    /// Normalizes `value` into `[0, 1]` against this domain.
    #[must_use]
    pub fn normalized(&self, value: f64) -> f64 {
        normalize(value, self.min, self.max)
    }
}
