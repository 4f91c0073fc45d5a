// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle wrapper: cap a callback to at most one execution per window.
//!
//! The wrapper tracks the instant of the last execution. A call with the
//! window elapsed executes immediately (leading edge); a call inside the
//! window is coalesced into one deferred execution at the window boundary
//! with the latest call's argument (trailing edge). Both edges can be
//! disabled through [`ThrottleOptions`].
//!
//! Unlike debounce, a throttled callback's return value is retained: every
//! call returns the last result the callback produced, including calls that
//! did not trigger an execution themselves.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::trace;

use pacer_runtime::timer::Timer;

use crate::options::{ThrottleOptions, DEFAULT_WAIT};

#[cfg(feature = "runtime-tokio")]
use pacer_runtime::impls::tokio::TokioTimer;

/// Wraps `callback` so it executes at most once per `wait` window.
///
/// `wait: None` selects [`DEFAULT_WAIT`] (200ms). Edge behavior is set by
/// `options`; both edges default to enabled. Constructing the wrapper has no
/// side effects; timers are only scheduled once [`Throttled::call`] is
/// invoked.
///
/// Requires a current Tokio runtime at call time.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<T, R, F>(
    callback: F,
    wait: Option<Duration>,
    options: ThrottleOptions,
) -> Throttled<T, R, TokioTimer>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    F: FnMut(T) -> R + Send + 'static,
{
    Throttled::with_timer(callback, wait, options, TokioTimer)
}

/// A throttled callback. Created by [`throttle`] or [`Throttled::with_timer`].
///
/// Clones share the same state, so a wrapper can be handed to several call
/// sites and still share one rate-limit window.
pub struct Throttled<T, R, TM: Timer> {
    state: Arc<Mutex<ThrottleState<T, R, TM::Instant>>>,
    wait: Duration,
    options: ThrottleOptions,
    timer: TM,
}

struct ThrottleState<T, R, I> {
    callback: Box<dyn FnMut(T) -> R + Send>,
    latest: Option<T>,
    last_result: Option<R>,
    pending: Option<AbortHandle>,
    epoch: u64,
    /// Instant of the last execution; `None` marks a fresh window.
    previous: Option<I>,
}

impl<T, R, TM> Throttled<T, R, TM>
where
    T: Send + 'static,
    R: Clone + Send + 'static,
    TM: Timer,
{
    /// Like [`throttle`], but with an explicit [`Timer`] implementation.
    #[must_use]
    pub fn with_timer<F>(
        callback: F,
        wait: Option<Duration>,
        options: ThrottleOptions,
        timer: TM,
    ) -> Self
    where
        F: FnMut(T) -> R + Send + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(ThrottleState {
                callback: Box::new(callback),
                latest: None,
                last_result: None,
                pending: None,
                epoch: 0,
                previous: None,
            })),
            wait: wait.unwrap_or(DEFAULT_WAIT),
            options,
            timer,
        }
    }

    /// Requests an execution of the wrapped callback with `args`.
    ///
    /// Executes immediately when the window has elapsed; otherwise records
    /// `args` as the latest candidate and, with `trailing` enabled, ensures
    /// one deferred execution is scheduled for the window boundary. Returns
    /// the last result the callback has produced so far.
    ///
    /// Panics raised by the callback propagate to this caller on an
    /// immediate fire; on a trailing fire they are confined to the timer
    /// task.
    pub fn call(&self, args: T) -> Option<R> {
        let now = self.timer.now();
        let mut state = self.state.lock();

        // leading: false suppresses the immediate fire of a fresh window by
        // seeding the last-execution mark to now.
        if state.previous.is_none() && !self.options.leading {
            state.previous = Some(now);
        }

        // A mark lying in the future means the clock moved backwards; treat
        // the window as elapsed rather than scheduling a bogus remainder.
        let (window_open, remaining) = match state.previous {
            None => (true, Duration::ZERO),
            Some(previous) if previous > now => (true, Duration::ZERO),
            Some(previous) => {
                let elapsed = now - previous;
                if elapsed >= self.wait {
                    (true, Duration::ZERO)
                } else {
                    (false, self.wait - elapsed)
                }
            }
        };

        state.latest = Some(args);

        if window_open {
            if let Some(handle) = state.pending.take() {
                handle.abort();
                state.epoch = state.epoch.wrapping_add(1);
            }
            state.previous = Some(now);
            if let Some(args) = state.latest.take() {
                trace!("throttle: window open, firing immediately");
                let result = (state.callback)(args);
                state.last_result = Some(result);
            }
        } else if state.pending.is_none() && self.options.trailing {
            trace!("throttle: trailing fire scheduled in {:?}", remaining);
            let shared = Arc::clone(&self.state);
            let sleep = self.timer.sleep_future(remaining);
            let timer = self.timer.clone();
            let leading = self.options.leading;
            let epoch = state.epoch;
            let task = tokio::spawn(async move {
                sleep.await;
                let mut state = shared.lock();
                if state.epoch != epoch {
                    return;
                }
                state.pending = None;
                state.previous = if leading { Some(timer.now()) } else { None };
                if let Some(args) = state.latest.take() {
                    trace!("throttle: trailing-edge fire");
                    let result = (state.callback)(args);
                    state.last_result = Some(result);
                }
            });
            state.pending = Some(task.abort_handle());
        }

        state.last_result.clone()
    }

    /// Whether a trailing execution is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

impl<T, R, TM: Timer> Clone for Throttled<T, R, TM> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            wait: self.wait,
            options: self.options,
            timer: self.timer.clone(),
        }
    }
}

impl<T, R, TM: Timer> core::fmt::Debug for Throttled<T, R, TM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.wait)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
