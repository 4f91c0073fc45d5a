// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for callbacks driven by high-frequency events.
//!
//! Both wrappers take a callback and hand back a new invocable of the same
//! calling convention, coalescing bursts of calls into fewer executions:
//!
//! - **[`debounce`]** - defer execution until a quiet period with no new
//!   calls has elapsed. Fire-and-forget: the callback's return value is
//!   discarded.
//! - **[`throttle`]** - cap execution to at most once per fixed window, with
//!   configurable leading/trailing-edge firing. Every call returns the last
//!   result the callback produced.
//!
//! Deferred fires run on a spawned Tokio task awaiting a [`Timer`] sleep, so
//! wrappers must be invoked from within a Tokio runtime. The timer seam is
//! generic: [`Debounced::with_timer`] and [`Throttled::with_timer`] accept
//! any [`Timer`] implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer::{debounce, throttle, ThrottleOptions};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Fires once, 300ms after the last keystroke of a burst.
//!     let save = debounce(
//!         |text: String| println!("autosaving {} bytes", text.len()),
//!         Some(Duration::from_millis(300)),
//!         false,
//!     );
//!     save.call("draft".to_string());
//!     save.call("draft 2".to_string());
//!
//!     // Fires immediately, then at most once per 200ms window.
//!     let report = throttle(
//!         |progress: u8| format!("{progress}%"),
//!         Some(Duration::from_millis(200)),
//!         ThrottleOptions::default(),
//!     );
//!     let last = report.call(10);
//!     assert_eq!(last.as_deref(), Some("10%"));
//! }
//! ```

mod debounce;
mod options;
mod throttle;

pub mod prelude;

pub use debounce::Debounced;
pub use options::{ThrottleOptions, DEFAULT_WAIT};
pub use throttle::Throttled;

pub use pacer_runtime::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::TokioTimer;
