// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event recording and sequence assertion helpers for console plugin tests.
//!
//! Test fixtures accumulate observed string events in an [`EventRecorder`]
//! while the code under test runs, then verify them with
//! [`EventRecorder::assert_recorded`], which clears the recorder on success so
//! each assertion checks only the events since the previous checkpoint.
//!
//! The [`assert`] module holds the underlying sequence comparisons: plain
//! element equality, nullable-array equality, runtime-type sequences and
//! command-title sequences. All of them panic with a readable rendering of
//! both sequences on the first mismatch.

pub mod assert;
mod fixture;
mod recorder;
mod reflect;
pub mod render;

pub use assert::Named;
pub use fixture::RecorderFixture;
pub use recorder::EventRecorder;
pub use reflect::{Reflect, TypeTag};
