// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use pacer_runtime::timer::Timer;

/// A Tokio-backed [`Timer`] whose `now` reading can be rewound.
///
/// Sleeps follow the real (or paused) Tokio clock; only the instant reading
/// is offset. Rewinding simulates a system clock that moved backwards, which
/// a throttle wrapper must treat as an elapsed window.
#[derive(Clone, Debug, Default)]
pub struct SkewTimer {
    rewind: Arc<Mutex<Duration>>,
}

impl SkewTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts all subsequent `now` readings backwards by `amount` more.
    pub fn rewind(&self, amount: Duration) {
        *self.rewind.lock() += amount;
    }
}

impl Timer for SkewTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now() - *self.rewind.lock()
    }
}
