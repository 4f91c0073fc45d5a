// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use crate::timer::Timer;

/// Timer backed by the Tokio runtime's clock.
///
/// `now` reads `tokio::time::Instant` rather than `std::time::Instant` so
/// that throttle-window arithmetic follows `tokio::time::pause` and
/// `advance` in tests the same way sleep futures do.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}
