// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Wait duration used when a wrapper is constructed with `wait: None`.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(200);

/// Edge configuration for a [`Throttled`](crate::Throttled) wrapper.
///
/// `leading` controls whether the first call of a fresh window executes
/// immediately; `trailing` controls whether the last call of a busy window
/// gets a deferred execution at the window boundary. Both default to `true`.
///
/// ```rust
/// use pacer::ThrottleOptions;
///
/// let trailing_only = ThrottleOptions::default().leading(false);
/// assert!(!trailing_only.leading);
/// assert!(trailing_only.trailing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleOptions {
    pub leading: bool,
    pub trailing: bool,
}

impl ThrottleOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }

    /// Sets whether the first call of a fresh window fires immediately.
    #[must_use]
    pub const fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    /// Sets whether the last call of a busy window fires at the boundary.
    #[must_use]
    pub const fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self::new()
    }
}
