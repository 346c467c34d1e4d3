// Copyright 2025 the Embergrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A byte-budgeted LRU ledger for realized cell pages.

use std::collections::VecDeque;

use hashbrown::HashMap;
use log::debug;

/// Tracks approximate byte sizes per key and evicts least-recently-used
/// entries when a budget is exceeded.
///
/// The ledger does not own the tracked data; it only accounts for it.
/// Hosts insert a key when they realize a page of cells and drop the page
/// when the key comes back out of [`MemoryLedger::insert`]'s eviction list.
/// Like [`crate::TimingRegistry`], this is an owned value, not a global:
/// independent ledgers never interact.
#[derive(Debug)]
pub struct MemoryLedger {
    budget: usize,
    used: usize,
    sizes: HashMap<String, usize>,
    // Front is least recently used.
    recency: VecDeque<String>,
}

impl MemoryLedger {
    /// Creates a ledger with a byte budget.
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            used: 0,
            sizes: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    /// The configured byte budget.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Bytes currently accounted for.
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Number of tracked keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns `true` if `key` is tracked.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.sizes.contains_key(key)
    }

    /// Tracks `bytes` under `key`, refreshing its recency, and returns the
    /// keys evicted to fit the budget.
    ///
    /// Inserting an existing key replaces its size. The newly inserted key
    /// is never evicted by its own insertion, even when `bytes` alone
    /// exceeds the budget; the ledger then reports over-budget usage until
    /// the entry is removed.
    pub fn insert(&mut self, key: &str, bytes: usize) -> Vec<String> {
        if let Some(previous) = self.sizes.insert(key.to_owned(), bytes) {
            self.used -= previous;
        }
        self.used += bytes;
        self.promote(key);

        let mut evicted = Vec::new();
        while self.used > self.budget {
            let Some(oldest) = self.recency.front().cloned() else {
                break;
            };
            if oldest == key {
                break;
            }
            self.recency.pop_front();
            if let Some(size) = self.sizes.remove(&oldest) {
                self.used -= size;
                evicted.push(oldest);
            }
        }
        if !evicted.is_empty() {
            debug!("evicted {} entries to fit {} bytes", evicted.len(), self.budget);
        }
        evicted
    }

    /// Refreshes `key`'s recency; returns `false` for untracked keys.
    pub fn touch(&mut self, key: &str) -> bool {
        if !self.sizes.contains_key(key) {
            return false;
        }
        self.promote(key);
        true
    }

    /// Stops tracking `key`, returning its recorded size.
    pub fn remove(&mut self, key: &str) -> Option<usize> {
        let size = self.sizes.remove(key)?;
        self.used -= size;
        self.recency.retain(|tracked| tracked != key);
        Some(size)
    }

    fn promote(&mut self, key: &str) {
        self.recency.retain(|tracked| tracked != key);
        self.recency.push_back(key.to_owned());
    }
}
