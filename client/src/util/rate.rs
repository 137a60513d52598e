//! Clock-driven debounce and throttle gates.
//!
//! Both gates are plain state machines over caller-supplied timestamps
//! (milliseconds, see `clock::now_ms`). Callers own the timers: a debounced
//! caller sleeps until `deadline()` and then asks `poll`.

#[cfg(test)]
#[path = "rate_test.rs"]
mod rate_test;

/// Collapses bursts of calls into one invocation.
///
/// Trailing mode fires once the burst has been quiet for `wait_ms`.
/// Immediate mode fires on the first call of a burst and swallows the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct Debounce {
    wait_ms: f64,
    immediate: bool,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn trailing(wait_ms: f64) -> Self {
        Self { wait_ms, immediate: false, deadline: None }
    }

    pub fn immediate(wait_ms: f64) -> Self {
        Self { wait_ms, immediate: true, deadline: None }
    }

    /// Record a call at `now`. Returns `true` if it should run right away.
    pub fn call(&mut self, now: f64) -> bool {
        if self.deadline.is_some_and(|d| now >= d) {
            self.deadline = None;
        }
        let call_now = self.immediate && self.deadline.is_none();
        self.deadline = Some(now + self.wait_ms);
        call_now
    }

    /// Returns `true` once per burst when the trailing invocation is due.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                !self.immediate
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }
}

/// Lets at most one call through per `limit_ms` window.
#[derive(Clone, Debug, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, blocked_until: None }
    }

    /// Returns `true` (and opens a new window) if a call at `now` may run.
    pub fn try_acquire(&mut self, now: f64) -> bool {
        if self.blocked_until.is_some_and(|until| now < until) {
            return false;
        }
        self.blocked_until = Some(now + self.limit_ms);
        true
    }
}
