// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used types and constructors.
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let on_scroll = throttle(
//!     |offset: u32| offset,
//!     Some(Duration::from_millis(200)),
//!     ThrottleOptions::default(),
//! );
//! # let _ = on_scroll.call(1);
//! # }
//! ```

pub use crate::options::{ThrottleOptions, DEFAULT_WAIT};
pub use crate::{Debounced, Throttled};

pub use pacer_runtime::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::throttle;
#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::TokioTimer;
