// Copyright 2025 the pacer authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use parking_lot::Mutex;

/// Records every argument a wrapped callback was invoked with.
///
/// Clones share the same log, so a test keeps one handle for assertions
/// while [`CallLog::record`] produces the callback handed to the wrapper.
#[derive(Debug, Default)]
pub struct CallLog<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallLog<T>
where
    T: Clone + Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a callback that appends its argument to this log.
    pub fn record(&self) -> impl FnMut(T) + Send + 'static {
        let calls = Arc::clone(&self.calls);
        move |value| calls.lock().push(value)
    }

    pub fn push(&self, value: T) {
        self.calls.lock().push(value);
    }

    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}
