// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic text rendering for assertion failures.

use similar::{ChangeTag, TextDiff};
use std::fmt::Display;

/// Render a sequence as separator-joined text for failure messages.
pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render a line diff between two sequences, one element per line.
///
/// Used when sequence lengths differ, where a flat joined rendering of long
/// sequences is hard to scan.
pub(crate) fn line_diff<T: Display>(expected: &[T], actual: &[T]) -> String {
    let expected_text = lines(expected);
    let actual_text = lines(actual);
    let diff = TextDiff::from_lines(expected_text.as_str(), actual_text.as_str());

    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(sign);
        out.push_str(change.value());
        if !change.value().ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn lines<T: Display>(items: &[T]) -> String {
    let mut text = String::new();
    for item in items {
        text.push_str(&item.to_string());
        text.push('\n');
    }
    text
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
