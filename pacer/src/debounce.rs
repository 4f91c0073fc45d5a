// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce wrapper: defer a callback until a quiet period has elapsed.
//!
//! Every call restarts the quiet-period timer, so a burst of calls collapses
//! into a single execution:
//!
//! - `immediate == false` (trailing edge): the callback runs exactly once,
//!   `wait` after the *last* call of the burst, with that call's argument.
//! - `immediate == true` (leading edge): the callback runs synchronously on
//!   the first call of the burst with that call's argument; the scheduled
//!   timer then only clears the pending flag so the next burst can fire.
//!
//! Debounce is fire-and-forget: nothing is propagated back to the caller.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::trace;

use pacer_runtime::timer::Timer;

use crate::options::DEFAULT_WAIT;

#[cfg(feature = "runtime-tokio")]
use pacer_runtime::impls::tokio::TokioTimer;

/// Wraps `callback` so it only executes after `wait` of call-free quiet time.
///
/// `wait: None` selects [`DEFAULT_WAIT`] (200ms). With `immediate == true`
/// the callback fires on the leading edge of a burst instead of the trailing
/// edge. Constructing the wrapper has no side effects; timers are only
/// scheduled once [`Debounced::call`] is invoked.
///
/// Requires a current Tokio runtime at call time.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<T, F>(callback: F, wait: Option<Duration>, immediate: bool) -> Debounced<T, TokioTimer>
where
    T: Send + 'static,
    F: FnMut(T) + Send + 'static,
{
    Debounced::with_timer(callback, wait, immediate, TokioTimer)
}

/// A debounced callback. Created by [`debounce`] or [`Debounced::with_timer`].
///
/// Clones share the same state, so a wrapper can be handed to several call
/// sites and still coalesce their bursts together.
pub struct Debounced<T, TM: Timer> {
    state: Arc<Mutex<DebounceState<T>>>,
    wait: Duration,
    immediate: bool,
    timer: TM,
}

struct DebounceState<T> {
    callback: Box<dyn FnMut(T) + Send>,
    latest: Option<T>,
    pending: Option<AbortHandle>,
    epoch: u64,
}

impl<T, TM> Debounced<T, TM>
where
    T: Send + 'static,
    TM: Timer,
{
    /// Like [`debounce`], but with an explicit [`Timer`] implementation.
    #[must_use]
    pub fn with_timer<F>(callback: F, wait: Option<Duration>, immediate: bool, timer: TM) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(DebounceState {
                callback: Box::new(callback),
                latest: None,
                pending: None,
                epoch: 0,
            })),
            wait: wait.unwrap_or(DEFAULT_WAIT),
            immediate,
            timer,
        }
    }

    /// Requests an execution of the wrapped callback with `args`.
    ///
    /// Cancels any previously scheduled execution and restarts the
    /// quiet-period timer. At most one timer is pending per wrapper at any
    /// time. Panics raised by the callback propagate to this caller on a
    /// leading-edge fire; on a trailing-edge fire they are confined to the
    /// timer task.
    pub fn call(&self, args: T) {
        let mut state = self.state.lock();

        let call_now = self.immediate && state.pending.is_none();
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }
        // A new epoch supersedes any timer task that already woke up and is
        // waiting on the state lock.
        state.epoch = state.epoch.wrapping_add(1);
        let epoch = state.epoch;
        state.latest = Some(args);

        trace!("debounce: quiet-period timer restarted for {:?}", self.wait);
        let shared = Arc::clone(&self.state);
        let sleep = self.timer.sleep_future(self.wait);
        let immediate = self.immediate;
        let task = tokio::spawn(async move {
            sleep.await;
            let mut state = shared.lock();
            if state.epoch != epoch {
                return;
            }
            state.pending = None;
            if immediate {
                // Leading edge already fired; the timer only closes the burst.
                state.latest = None;
            } else if let Some(args) = state.latest.take() {
                trace!("debounce: trailing-edge fire");
                (state.callback)(args);
            }
        });
        state.pending = Some(task.abort_handle());

        if call_now {
            if let Some(args) = state.latest.take() {
                trace!("debounce: leading-edge fire");
                (state.callback)(args);
            }
        }
    }

    /// Whether an execution is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

impl<T, TM: Timer> Clone for Debounced<T, TM> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            wait: self.wait,
            immediate: self.immediate,
            timer: self.timer.clone(),
        }
    }
}

impl<T, TM: Timer> core::fmt::Debug for Debounced<T, TM> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.wait)
            .field("immediate", &self.immediate)
            .finish_non_exhaustive()
    }
}
