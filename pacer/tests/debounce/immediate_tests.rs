// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_test_utils::{advance_and_run, run_pending, CallLog};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_immediate_fires_synchronously_on_leading_edge() {
    // Arrange

    let log = CallLog::new();
    let debounced = debounce(log.record(), Some(Duration::from_millis(100)), true);

    // Act & Assert: fires before any timer pump, with the first call's args.
    debounced.call("first");
    assert_eq!(log.calls(), vec!["first"]);
    assert!(debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_immediate_suppresses_calls_while_timer_pending() {
    // Arrange

    let log = CallLog::new();
    let debounced = debounce(log.record(), Some(Duration::from_millis(100)), true);

    // Act
    debounced.call("first");
    advance_and_run(Duration::from_millis(50)).await;
    debounced.call("second");
    advance_and_run(Duration::from_millis(50)).await;
    debounced.call("third");

    // Assert: the burst produced exactly one leading fire, and the trailing
    // timer is a no-op guard.
    advance_and_run(Duration::from_millis(200)).await;
    assert_eq!(log.calls(), vec!["first"]);
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_immediate_refires_after_quiet_period() {
    // Arrange

    let log = CallLog::new();
    let debounced = debounce(log.record(), Some(Duration::from_millis(100)), true);

    // Act & Assert
    debounced.call(1);
    assert_eq!(log.calls(), vec![1]);

    advance_and_run(Duration::from_millis(100)).await;
    assert!(!debounced.is_pending());

    debounced.call(2);
    assert_eq!(log.calls(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_immediate_with_zero_pending_state_after_construction() {
    // Arrange

    let log: CallLog<u8> = CallLog::new();
    let debounced = debounce(log.record(), Some(Duration::from_millis(100)), true);

    // Act & Assert
    run_pending().await;
    assert!(!debounced.is_pending());
    assert!(log.is_empty());
}
