// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn join_empty_is_empty_string() {
    let items: Vec<String> = vec![];
    assert_eq!(join(&items, ", "), "");
}

#[test]
fn join_single_has_no_separator() {
    assert_eq!(join(&["solo"], ", "), "solo");
}

#[test]
fn join_renders_in_order() {
    assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
}

#[test]
fn join_uses_display_rendering() {
    assert_eq!(join(&[1, 2, 3], "-"), "1-2-3");
}

#[test]
fn line_diff_marks_missing_element() {
    let diff = line_diff(&["a", "b"], &["a"]);

    assert!(diff.contains(" a\n"), "{diff}");
    assert!(diff.contains("-b\n"), "{diff}");
    assert!(!diff.contains("+"), "{diff}");
}

#[test]
fn line_diff_marks_extra_element() {
    let diff = line_diff(&["a"], &["a", "b"]);

    assert!(diff.contains("+b\n"), "{diff}");
}

#[test]
fn line_diff_of_equal_sequences_has_no_changes() {
    let diff = line_diff(&["a", "b"], &["a", "b"]);

    assert!(!diff.contains('+'), "{diff}");
    assert!(!diff.contains('-'), "{diff}");
}
