// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn recorder() -> EventRecorder {
    EventRecorder::new()
}

#[rstest]
fn new_recorder_is_empty(recorder: EventRecorder) {
    assert!(recorder.is_empty());
    assert_eq!(recorder.len(), 0);
    assert_eq!(recorder.events(), Vec::<String>::new());
}

#[rstest]
fn record_appends_in_order(recorder: EventRecorder) {
    recorder.record("open");
    recorder.record("write");
    recorder.record("close");

    assert_eq!(recorder.len(), 3);
    assert_eq!(recorder.events(), vec!["open", "write", "close"]);
}

#[rstest]
fn clear_discards_events(recorder: EventRecorder) {
    recorder.record("a");
    recorder.record("b");
    recorder.clear();

    assert!(recorder.is_empty());
}

#[rstest]
fn take_drains_buffer(recorder: EventRecorder) {
    recorder.record("a");
    recorder.record("b");

    let drained = recorder.take();
    assert_eq!(drained, vec!["a", "b"]);
    assert!(recorder.is_empty());
}

#[rstest]
fn clone_shares_buffer(recorder: EventRecorder) {
    let handle = recorder.clone();
    handle.record("from handle");
    recorder.record("from original");

    assert_eq!(recorder.events(), vec!["from handle", "from original"]);
    assert_eq!(handle.len(), 2);
}

#[rstest]
fn assert_recorded_empty_against_empty(recorder: EventRecorder) {
    recorder.assert_recorded(&[]);
    assert!(recorder.is_empty());
}

#[rstest]
fn assert_recorded_clears_on_success(recorder: EventRecorder) {
    recorder.record("a");
    recorder.record("b");

    recorder.assert_recorded(&["a", "b"]);

    // Checkpoint: nothing recorded since the previous assertion.
    recorder.assert_recorded(&[]);
}

#[rstest]
fn assert_recorded_checkpoints_phases(recorder: EventRecorder) {
    recorder.record("setup");
    recorder.assert_recorded(&["setup"]);

    recorder.record("run");
    recorder.record("finish");
    recorder.assert_recorded(&["run", "finish"]);
}

#[rstest]
fn assert_recorded_retains_events_on_failure(recorder: EventRecorder) {
    recorder.record("a");

    let handle = recorder.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        handle.assert_recorded(&["b"]);
    }));

    assert!(result.is_err());
    assert_eq!(recorder.events(), vec!["a"]);
}

#[rstest]
#[should_panic(expected = "sequence length mismatch")]
fn assert_recorded_panics_on_length_mismatch(recorder: EventRecorder) {
    recorder.record("only");
    recorder.assert_recorded(&["only", "more"]);
}

#[rstest]
#[should_panic(expected = "sequence mismatch at index 1")]
fn assert_recorded_panics_on_element_mismatch(recorder: EventRecorder) {
    recorder.record("a");
    recorder.record("b");
    recorder.assert_recorded(&["a", "c"]);
}
