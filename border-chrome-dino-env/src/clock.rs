//! Pacing of environment steps.
use std::{cell::RefCell, rc::Rc, thread, time::Duration};

/// Waits between an action and the next observation.
pub trait Clock {
    /// Blocks for `d`.
    fn sleep(&mut self, d: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, d: Duration) {
        thread::sleep(d);
    }
}

/// Records requested waits without blocking.
///
/// Clones share the same history, so a handle kept outside of an environment
/// sees the waits issued by the environment.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl ManualClock {
    /// Constructs a clock with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the requested waits in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Returns the total time waited.
    pub fn elapsed(&self) -> Duration {
        self.sleeps.borrow().iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, d: Duration) {
        self.sleeps.borrow_mut().push(d);
    }
}
