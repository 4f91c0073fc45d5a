// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for pacer's deferred-execution timers.
//!
//! The rate-limiting wrappers in the `pacer` crate need exactly one capability
//! from their host: "give me a future that completes after a duration, and a
//! monotonic reading of now". The [`timer::Timer`] trait captures that seam,
//! and [`impls`] provides the Tokio implementation behind the default
//! `runtime-tokio` feature.

pub mod impls;
pub mod timer;
