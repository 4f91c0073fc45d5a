// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ord;
use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// The deferred-execution facility a rate-limiting wrapper needs from its host.
///
/// A `Timer` produces sleep futures for scheduling trailing-edge fires and
/// instant readings for deciding whether a throttle window has elapsed. The
/// instant type must follow the same clock the sleep futures run on, so that
/// a paused test clock moves both together.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send + 'static;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns a future that completes `duration` from now.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current reading of this timer's clock.
    fn now(&self) -> Self::Instant;
}
