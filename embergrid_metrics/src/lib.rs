// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embergrid Metrics: explicitly-owned timing and memory accounting.
//!
//! Rendering hosts commonly want to know how long layout passes take and
//! how much memory realized cell pages hold. Both concerns live here as
//! plain owned values, deliberately not process-wide singletons: construct
//! a [`TimingRegistry`] or [`MemoryLedger`] where you need one, inject it,
//! and drop it when done. Independent instances never interfere, so tests
//! can create as many as they like.
//!
//! - [`TimingRegistry`]: named duration accumulators with an RAII
//!   [`TimingGuard`] for scope timing.
//! - [`MemoryLedger`]: a byte-budgeted LRU ledger over string keys with
//!   observable eviction.
//!
//! ```rust
//! use std::time::Duration;
//! use embergrid_metrics::TimingRegistry;
//!
//! let mut registry = TimingRegistry::new();
//! registry.record("layout", Duration::from_millis(4));
//! registry.record("layout", Duration::from_millis(6));
//!
//! let stats = registry.stats("layout").unwrap();
//! assert_eq!(stats.count, 2);
//! assert_eq!(stats.mean(), Duration::from_millis(5));
//! ```

mod ledger;
mod timing;

pub use ledger::MemoryLedger;
pub use timing::{TimingGuard, TimingRegistry, TimingStats};
