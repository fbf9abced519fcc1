//! Rate limiting for high-frequency events (scroll, resize).

use super::deadline::{Deadline, Scheduled};

/// Trailing-edge throttle.
///
/// The first request in a quiet period arms a deadline `wait` ms later; further
/// requests are absorbed until that deadline fires.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    wait: f64,
    pending: Deadline,
}

impl Throttle {
    /// Create a throttle with the given window in milliseconds.
    pub fn new(wait: f64) -> Self {
        Self {
            wait,
            pending: Deadline::new(),
        }
    }

    /// Register an event. Returns `true` if a new deadline was armed.
    pub fn request(&mut self, now: f64) -> bool {
        if self.pending.is_armed() {
            return false;
        }
        self.pending.arm(now + self.wait);
        true
    }

    /// Returns `true` once when the armed deadline has been reached.
    pub fn poll(&mut self, now: f64) -> bool {
        self.pending.take_due(now).is_some()
    }
}

impl Scheduled for Throttle {
    fn next_deadline(&self) -> Option<f64> {
        self.pending.at()
    }
}

/// Trailing-edge debounce: fires once after `wait` ms without new triggers.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
    wait: f64,
    pending: Deadline,
}

impl Debounce {
    /// Create a debounce with the given quiet period in milliseconds.
    pub fn new(wait: f64) -> Self {
        Self {
            wait,
            pending: Deadline::new(),
        }
    }

    /// Register an event, pushing the deadline back.
    pub fn trigger(&mut self, now: f64) {
        self.pending.arm(now + self.wait);
    }

    /// Returns `true` once when the quiet period has elapsed.
    pub fn poll(&mut self, now: f64) -> bool {
        self.pending.take_due(now).is_some()
    }
}

impl Scheduled for Debounce {
    fn next_deadline(&self) -> Option<f64> {
        self.pending.at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_fires_once_per_window() {
        let mut t = Throttle::new(10.0);
        assert!(t.request(0.0));
        assert!(!t.request(3.0));
        assert!(!t.request(9.0));
        assert_eq!(t.next_deadline(), Some(10.0));
        assert!(!t.poll(9.5));
        assert!(t.poll(10.0));
        assert!(!t.poll(11.0));
        // Next window starts fresh.
        assert!(t.request(12.0));
        assert_eq!(t.next_deadline(), Some(22.0));
    }

    #[test]
    fn test_debounce_waits_for_quiet() {
        let mut d = Debounce::new(250.0);
        d.trigger(0.0);
        d.trigger(100.0);
        d.trigger(200.0);
        assert!(!d.poll(300.0));
        assert!(d.poll(450.0));
        assert!(!d.poll(1000.0));
    }
}
