// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Lets expired timer tasks run to completion on the current-thread runtime.
///
/// Yields a few times so a task woken by an elapsed sleep gets scheduled and
/// executes its fire before the test continues. Yielding keeps the test task
/// runnable, so the paused clock does not auto-advance here.
pub async fn run_pending() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

/// Advances the paused Tokio clock and pumps any timers that expired.
pub async fn advance_and_run(duration: Duration) {
    tokio::time::advance(duration).await;
    run_pending().await;
}
