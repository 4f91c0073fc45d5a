// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_test_utils::{advance_and_run, CallLog};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_leading_false_suppresses_first_immediate_fire() {
    // Arrange

    let log = CallLog::new();
    let throttled = throttle(
        log.record(),
        Some(Duration::from_millis(100)),
        ThrottleOptions::default().leading(false),
    );

    // Act & Assert: first call of a fresh window is deferred to the boundary.
    throttled.call('a');
    assert!(log.is_empty());
    assert!(throttled.is_pending());

    advance_and_run(Duration::from_millis(99)).await;
    assert!(log.is_empty());

    advance_and_run(Duration::from_millis(1)).await;
    assert_eq!(log.calls(), vec!['a']);
}

#[tokio::test(start_paused = true)]
async fn test_leading_false_suppresses_every_fresh_window() {
    // Arrange

    let log = CallLog::new();
    let throttled = throttle(
        log.record(),
        Some(Duration::from_millis(100)),
        ThrottleOptions::default().leading(false),
    );

    // Act & Assert: the trailing fire resets to a fresh window, so the next
    // call is again deferred instead of firing immediately.
    throttled.call('a');
    advance_and_run(Duration::from_millis(100)).await;
    assert_eq!(log.calls(), vec!['a']);

    advance_and_run(Duration::from_millis(50)).await;
    throttled.call('b');
    assert_eq!(log.calls(), vec!['a']);

    advance_and_run(Duration::from_millis(100)).await;
    assert_eq!(log.calls(), vec!['a', 'b']);
}

#[tokio::test(start_paused = true)]
async fn test_leading_false_first_call_returns_none() {
    // Arrange

    let throttled = throttle(
        |value: i32| value,
        Some(Duration::from_millis(100)),
        ThrottleOptions::default().leading(false),
    );

    // Act & Assert: no execution has happened yet, so there is no result.
    assert_eq!(throttled.call(1), None);
}

#[tokio::test(start_paused = true)]
async fn test_trailing_false_drops_window_calls() {
    // Arrange

    let log = CallLog::new();
    let throttled = throttle(
        log.record(),
        Some(Duration::from_millis(100)),
        ThrottleOptions::default().trailing(false),
    );

    // Act & Assert
    throttled.call('a');
    assert_eq!(log.calls(), vec!['a']);

    advance_and_run(Duration::from_millis(30)).await;
    throttled.call('b');
    assert!(!throttled.is_pending());

    advance_and_run(Duration::from_millis(200)).await;
    assert_eq!(log.calls(), vec!['a']);

    // The next call past the window still fires on the leading edge.
    throttled.call('c');
    assert_eq!(log.calls(), vec!['a', 'c']);
}

#[tokio::test(start_paused = true)]
async fn test_both_edges_disabled_fires_only_past_the_window() {
    // Arrange

    let log = CallLog::new();
    let throttled = throttle(
        log.record(),
        Some(Duration::from_millis(100)),
        ThrottleOptions::new().leading(false).trailing(false),
    );

    // Act & Assert: the seeding call neither fires nor schedules anything.
    throttled.call('a');
    assert!(log.is_empty());
    assert!(!throttled.is_pending());

    advance_and_run(Duration::from_millis(100)).await;
    assert!(log.is_empty());

    // Past the seeded window, a call executes immediately.
    throttled.call('b');
    assert_eq!(log.calls(), vec!['b']);
}
