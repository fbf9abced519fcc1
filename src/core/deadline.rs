//! One-shot deadlines for models that run on virtual time.
//!
//! Models never touch platform timers. They arm [`Deadline`]s and expose the
//! earliest one through [`Scheduled`]; the caller polls them when that time
//! arrives. Tests advance time by polling with larger `now` values.

/// A single pending point in time, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Deadline {
    at: Option<f64>,
}

impl Deadline {
    /// Create a disarmed deadline.
    #[inline]
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arm (or re-arm) the deadline at an absolute time.
    #[inline]
    pub fn arm(&mut self, at: f64) {
        self.at = Some(at);
    }

    /// Cancel the deadline.
    #[inline]
    pub fn disarm(&mut self) {
        self.at = None;
    }

    /// The armed time, if any.
    #[inline]
    pub fn at(&self) -> Option<f64> {
        self.at
    }

    /// Whether the deadline is armed.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Disarm and return the armed time if it is due.
    pub fn take_due(&mut self, now: f64) -> Option<f64> {
        match self.at {
            Some(at) if at <= now => {
                self.at = None;
                Some(at)
            }
            _ => None,
        }
    }
}

/// Anything that owns deadlines and wants to be polled.
pub trait Scheduled {
    /// Earliest armed deadline, or `None` when idle.
    fn next_deadline(&self) -> Option<f64>;
}

/// Earliest of several optional times.
pub fn earliest<I>(times: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    times.into_iter().flatten().reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_disarms() {
        let mut d = Deadline::new();
        d.arm(100.0);
        assert_eq!(d.take_due(99.0), None);
        assert!(d.is_armed());
        assert_eq!(d.take_due(100.0), Some(100.0));
        assert!(!d.is_armed());
        assert_eq!(d.take_due(200.0), None);
    }

    #[test]
    fn test_earliest() {
        assert_eq!(earliest([None, Some(5.0), Some(3.0)]), Some(3.0));
        assert_eq!(earliest([None, None]), None);
    }
}
