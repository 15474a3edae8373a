//! Sliding-window circuit breaker guarding calls to a single downstream
//! service.
//!
//! The breaker tracks the last `window_size` recorded outcomes in a ring
//! buffer and moves between three states:
//!
//! ```text
//! ┌────────┐   failures / window >= threshold   ┌──────────┐
//! │ Closed │ ───────────────────────────────────▶│   Open   │
//! └────────┘                                     └──────────┘
//!      ▲                                               │
//!      │        successes > window / 2                 │ open_timeout elapsed
//!      └──────────────┬──────────────┐◀────────────────┘
//!                      │  Half-Open   │
//!                      └──────────────┘
//!                             │
//!                             └─ any failure ─▶ back to Open
//! ```
//!
//! `allow` and `record` are the only two operations; both acquire a single
//! mutex and do constant work, so neither ever blocks on I/O.

use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

struct Inner {
    state: BreakerState,
    window: Vec<bool>,
    cursor: usize,
    failures: i64,
    successes: i64,
    last_state_change: Instant,
}

pub struct CircuitBreaker {
    window_size: usize,
    failure_threshold: f64,
    open_timeout: Duration,
    inner: Mutex<Inner>,
}

impl CircuitBreaker {
    pub fn new(window_size: usize, failure_threshold: f64, open_timeout: Duration) -> Self {
        Self {
            window_size,
            failure_threshold,
            open_timeout,
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                window: vec![false; window_size],
                cursor: 0,
                failures: 0,
                successes: 0,
                last_state_change: Instant::now(),
            }),
        }
    }

    /// Defaults used throughout the gateway: a 10-slot window, a 50% failure
    /// threshold, and a 5 second open-state cooldown.
    pub fn with_defaults() -> Self {
        Self::new(10, 0.5, Duration::from_secs(5))
    }

    /// Returns whether a call may proceed. May transition the breaker from
    /// Open to HalfOpen as a side effect; never records an outcome itself.
    pub fn allow(&self) -> bool {
        let mut inner = self.inner.lock().expect("breaker mutex poisoned");

        if inner.state == BreakerState::Open {
            if inner.last_state_change.elapsed() > self.open_timeout {
                inner.state = BreakerState::HalfOpen;
                inner.window.iter_mut().for_each(|slot| *slot = false);
                inner.cursor = 0;
                inner.failures = 0;
                inner.successes = 0;
            } else {
                return false;
            }
        }

        true
    }

    /// Records the outcome of a completed call and evaluates state
    /// transitions. Must not be called for calls that `allow` rejected.
    pub fn record(&self, success: bool) {
        let mut inner = self.inner.lock().expect("breaker mutex poisoned");

        let cursor = inner.cursor;
        let displaced_was_failure = inner.window[cursor];
        if displaced_was_failure {
            inner.failures -= 1;
        } else {
            inner.successes -= 1;
        }

        inner.window[cursor] = !success;
        if success {
            inner.successes += 1;
        } else {
            inner.failures += 1;
        }
        inner.cursor = (cursor + 1) % self.window_size;

        self.evaluate(&mut inner);
    }

    fn evaluate(&self, inner: &mut Inner) {
        let failure_rate = inner.failures as f64 / self.window_size as f64;

        match inner.state {
            BreakerState::Closed => {
                if failure_rate >= self.failure_threshold {
                    inner.state = BreakerState::Open;
                    inner.last_state_change = Instant::now();
                }
            }
            BreakerState::HalfOpen => {
                if inner.failures > 0 {
                    inner.state = BreakerState::Open;
                    inner.last_state_change = Instant::now();
                } else if inner.successes > (self.window_size / 2) as i64 {
                    inner.state = BreakerState::Closed;
                }
            }
            BreakerState::Open => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> BreakerState {
        self.inner.lock().expect("breaker mutex poisoned").state
    }
}
