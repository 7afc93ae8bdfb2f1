//! Single-slot debouncing on top of browser timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs the most recent call once input has been quiet for `delay_ms`.
///
/// Holds at most one pending timer. Scheduling a call cancels the pending
/// one, so bursts collapse into a single run of the last call.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `f`, replacing any call still waiting.
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        // Dropping the previous Timeout clears it; clearing a fired one is a no-op
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }
}
