// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence assertion helpers.
//!
//! Every helper panics on the first mismatch, rendering both sequences as
//! comma-joined text. A panic aborts the current test; there is no
//! recoverable variant.

use crate::reflect::{short_type_name, Reflect, TypeTag};
use crate::render::{join, line_diff};
use std::fmt::Display;

/// A command-like object exposing a textual name.
///
/// The seam for title assertions: console actions, menu commands and similar
/// collaborators implement this in their test builds.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Assert that two sequences are equal element by element.
///
/// Panics if the lengths differ, rendering both sequences and a line diff.
/// Otherwise panics at the first index where the elements compare unequal,
/// naming the index and both values.
#[track_caller]
pub fn assert_seq_eq<T>(actual: &[T], expected: &[T])
where
    T: PartialEq + Display,
{
    if actual.len() != expected.len() {
        panic!(
            "sequence length mismatch: expected {} element(s), got {}\n\
             Expected: [{}]\n\
             Actual:   [{}]\n\
             Diff:\n{}",
            expected.len(),
            actual.len(),
            join(expected, ", "),
            join(actual, ", "),
            line_diff(expected, actual),
        );
    }
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if a != e {
            panic!(
                "sequence mismatch at index {i}: expected `{e}`, got `{a}`\n\
                 Expected: [{}]\n\
                 Actual:   [{}]",
                join(expected, ", "),
                join(actual, ", "),
            );
        }
    }
}

/// Assert that two possibly-absent arrays are present and equal.
///
/// The absence checks run before any length comparison so a `None` operand
/// reports as absence rather than as a length mismatch.
#[track_caller]
pub fn assert_array_eq<T>(actual: Option<&[T]>, expected: Option<&[T]>)
where
    T: PartialEq + Display,
{
    let Some(actual) = actual else {
        panic!("actual array is absent");
    };
    let Some(expected) = expected else {
        panic!("expected array is absent");
    };
    assert_seq_eq(actual, expected);
}

/// Assert that the runtime types of `actual` match `expected`, in order.
///
/// Panics if the counts differ, rendering both sides as joined type names.
/// Otherwise panics at the first index whose runtime type does not match the
/// expected descriptor.
#[track_caller]
pub fn assert_type_seq_eq<R: Reflect>(actual: &[R], expected: &[TypeTag]) {
    if actual.len() != expected.len() {
        let actual_names: Vec<&str> = actual.iter().map(short_type_name).collect();
        panic!(
            "type sequence length mismatch: expected {} element(s), got {}\n\
             Expected: [{}]\n\
             Actual:   [{}]",
            expected.len(),
            actual.len(),
            join(expected, ", "),
            actual_names.join(", "),
        );
    }
    for (i, (value, tag)) in actual.iter().zip(expected).enumerate() {
        if !tag.matches(value.as_any()) {
            panic!(
                "type mismatch at index {i}: expected `{tag}`, got `{}`",
                short_type_name(value),
            );
        }
    }
}

/// Assert that the names of `actual` match `expected`, in order.
///
/// Panics if the counts differ; otherwise panics at the first index whose
/// name differs from the expected text.
#[track_caller]
pub fn assert_title_seq_eq<C, S>(actual: &[C], expected: &[S])
where
    C: Named,
    S: AsRef<str>,
{
    if actual.len() != expected.len() {
        let actual_names: Vec<&str> = actual.iter().map(Named::name).collect();
        let expected_names: Vec<&str> = expected.iter().map(AsRef::as_ref).collect();
        panic!(
            "title sequence length mismatch: expected {} element(s), got {}\n\
             Expected: [{}]\n\
             Actual:   [{}]",
            expected.len(),
            actual.len(),
            expected_names.join(", "),
            actual_names.join(", "),
        );
    }
    for (i, (command, title)) in actual.iter().zip(expected).enumerate() {
        let title = title.as_ref();
        if command.name() != title {
            panic!(
                "title mismatch at index {i}: expected `{title}`, got `{}`",
                command.name(),
            );
        }
    }
}

#[cfg(test)]
#[path = "assert_tests.rs"]
mod tests;
