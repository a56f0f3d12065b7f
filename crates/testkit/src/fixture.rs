// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension point for concrete test fixtures.

use crate::recorder::EventRecorder;

/// Mixin for fixture structs that embed an [`EventRecorder`].
///
/// Implement [`recorder`](RecorderFixture::recorder) and the event helpers
/// come for free:
///
/// ```
/// use console_testkit::{EventRecorder, RecorderFixture};
///
/// #[derive(Default)]
/// struct ConsoleFixture {
///     recorder: EventRecorder,
/// }
///
/// impl RecorderFixture for ConsoleFixture {
///     fn recorder(&self) -> &EventRecorder {
///         &self.recorder
///     }
/// }
///
/// let fixture = ConsoleFixture::default();
/// fixture.record_event("opened");
/// fixture.assert_recorded(&["opened"]);
/// ```
pub trait RecorderFixture {
    /// The fixture's recorder, alive for the duration of the test.
    fn recorder(&self) -> &EventRecorder;

    /// Append one event to the recorder.
    fn record_event(&self, event: impl Into<String>)
    where
        Self: Sized,
    {
        self.recorder().record(event);
    }

    /// Assert the recorded events equal `expected`, then clear the recorder.
    ///
    /// See [`EventRecorder::assert_recorded`] for the checkpoint semantics.
    #[track_caller]
    fn assert_recorded(&self, expected: &[&str]) {
        self.recorder().assert_recorded(expected);
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
