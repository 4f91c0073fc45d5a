// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pacer workspace.
//!
//! This crate supports deterministic testing of the rate-limiting wrappers
//! under Tokio's paused clock. It is meant for development and testing only.
//!
//! # Key types
//!
//! - [`CallLog`] - records every argument a wrapped callback was invoked
//!   with, so tests can assert on execution count and coalesced arguments.
//! - [`SkewTimer`] - a [`Timer`](pacer_runtime::timer::Timer) whose `now`
//!   reading can be rewound, for exercising the non-monotonic-clock guard.
//! - [`helpers`] - pumps for letting expired timer tasks run on the paused
//!   clock (`run_pending`, `advance_and_run`).
//! - [`test_data`] - `Person` fixtures for callbacks taking structured
//!   arguments.

pub mod call_log;
pub mod helpers;
pub mod person;
pub mod skew_timer;
pub mod test_data;

pub use call_log::CallLog;
pub use helpers::{advance_and_run, run_pending};
pub use person::Person;
pub use skew_timer::SkewTimer;
