// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test event recorder.

use crate::assert::assert_seq_eq;
use parking_lot::Mutex;
use std::sync::Arc;

/// Ordered list of string events recorded during a single test.
///
/// A fixture constructs a fresh recorder per test and drops it when the test
/// ends, so the buffer exists exactly for the test's execution window.
/// Cloning shares the underlying buffer, letting code under test hold a
/// handle while the fixture keeps another.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl EventRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.
    pub fn record(&self, event: impl Into<String>) {
        self.events.lock().push(event.into());
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Drain the buffer, leaving it empty.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Assert that the recorded events equal `expected`, then clear.
    ///
    /// Clearing on success makes each call a checkpoint: the next call
    /// verifies only the events recorded after this one. A mismatch panics
    /// before the clear, so the buffer still holds the offending events.
    #[track_caller]
    pub fn assert_recorded(&self, expected: &[&str]) {
        let events = self.events();
        let actual: Vec<&str> = events.iter().map(String::as_str).collect();
        assert_seq_eq(&actual, expected);
        self.clear();
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
