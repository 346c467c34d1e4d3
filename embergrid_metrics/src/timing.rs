// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named duration accumulators for frame and layout timing.

use std::time::{Duration, Instant};

use hashbrown::HashMap;

/// Accumulated statistics for one named timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingStats {
    /// Number of recorded durations.
    pub count: u64,
    /// Sum of all recorded durations.
    pub total: Duration,
    /// Shortest recorded duration.
    pub min: Duration,
    /// Longest recorded duration.
    pub max: Duration,
}

impl TimingStats {
    /// Mean recorded duration, zero before anything was recorded.
    #[must_use]
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        self.total / u32::try_from(self.count).unwrap_or(u32::MAX)
    }
}

/// An owned registry of named timers.
///
/// Not a singleton: every host (and every test) constructs its own
/// registry, so instances never observe each other's measurements.
#[derive(Debug, Default)]
pub struct TimingRegistry {
    timers: HashMap<String, TimingStats>,
}

impl TimingRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one duration under `name`.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        match self.timers.get_mut(name) {
            Some(stats) => {
                stats.count += 1;
                stats.total += elapsed;
                stats.min = stats.min.min(elapsed);
                stats.max = stats.max.max(elapsed);
            }
            None => {
                self.timers.insert(
                    name.to_owned(),
                    TimingStats {
                        count: 1,
                        total: elapsed,
                        min: elapsed,
                        max: elapsed,
                    },
                );
            }
        }
    }

    /// Starts a scope timer; the elapsed time is recorded when the guard
    /// drops.
    pub fn start(&mut self, name: &str) -> TimingGuard<'_> {
        TimingGuard {
            registry: self,
            name: name.to_owned(),
            begun: Instant::now(),
        }
    }

    /// Statistics for `name`, if anything was recorded under it.
    #[must_use]
    pub fn stats(&self, name: &str) -> Option<&TimingStats> {
        self.timers.get(name)
    }

    /// Names with recorded statistics, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.timers.keys().map(String::as_str)
    }

    /// Discards all recorded statistics.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

/// RAII guard created by [`TimingRegistry::start`].
#[derive(Debug)]
pub struct TimingGuard<'a> {
    registry: &'a mut TimingRegistry,
    name: String,
    begun: Instant,
}

impl Drop for TimingGuard<'_> {
    fn drop(&mut self) {
        let elapsed = self.begun.elapsed();
        self.registry.record(&self.name, elapsed);
    }
}
