//! Bridges model deadlines to browser timers.

use std::cell::RefCell;

use gloo::timers::callback::Timeout;

use crate::core::now_ms;

/// Keeps at most one `setTimeout` armed for a model's earliest deadline.
///
/// Rescheduling replaces (and thereby cancels) the previous timeout, including
/// from inside its own callback; dropping the timer cancels whatever is pending.
#[derive(Default)]
pub struct DeadlineTimer {
    handle: RefCell<Option<Timeout>>,
}

impl DeadlineTimer {
    /// Arm for `deadline` (ms on the [`now_ms`] clock), or disarm for `None`.
    pub fn schedule(&self, deadline: Option<f64>, callback: impl FnOnce() + 'static) {
        let timeout = deadline.map(|at| {
            let delay = (at - now_ms()).max(0.0).ceil() as u32;
            Timeout::new(delay, callback)
        });
        *self.handle.borrow_mut() = timeout;
    }

    /// Cancel the pending timeout.
    pub fn cancel(&self) {
        self.handle.borrow_mut().take();
    }
}

impl std::fmt::Debug for DeadlineTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeadlineTimer")
            .field("armed", &self.handle.borrow().is_some())
            .finish()
    }
}
