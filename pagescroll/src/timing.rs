//! Timer primitives driven by caller-supplied timestamps.
//!
//! Nothing here reads a clock: adapters pass `now_ms` from their frame or timer callbacks.

/// Lets at most one call through per `interval_ms`.
///
/// The first call is always permitted. Rejected calls are dropped, not deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_ready(&self, now_ms: u64) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Returns `true` and records `now_ms` when the call is permitted.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if !self.is_ready(now_ms) {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Fires once after `delay_ms` have passed since the last `arm`.
///
/// Re-arming pushes the deadline out; `poll` reports the expiry exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay_ms: u64,
    armed_at_ms: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            armed_at_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.armed_at_ms = Some(now_ms);
    }

    pub fn cancel(&mut self) {
        self.armed_at_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// The timestamp at which the debounce will fire, if armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.armed_at_ms.map(|armed| armed.saturating_add(self.delay_ms))
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(armed) = self.armed_at_ms else {
            return false;
        };
        if now_ms.saturating_sub(armed) < self.delay_ms {
            return false;
        }
        self.armed_at_ms = None;
        true
    }
}
