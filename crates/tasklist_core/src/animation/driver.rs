//! Animation driver seam between the store and a presentation runtime.
//!
//! # Invariants
//! - `create_handle` never returns the same id twice for one driver.
//! - `start` is fire-and-forget; completion comes back through the store.

use crate::animation::handle::{AnimationHandle, AnimationPlan};
use log::trace;

/// Capability the store uses to create and drive animated values.
pub trait AnimationDriver {
    fn create_handle(&mut self, initial: f64) -> AnimationHandle;
    fn start(&mut self, plan: AnimationPlan);
}

/// Driver for headless use: hands out ids and drops every plan.
#[derive(Debug, Default)]
pub struct NoopAnimationDriver {
    next_handle: u64,
}

impl NoopAnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationDriver for NoopAnimationDriver {
    fn create_handle(&mut self, initial: f64) -> AnimationHandle {
        self.next_handle += 1;
        AnimationHandle::new(self.next_handle, initial)
    }

    fn start(&mut self, plan: AnimationPlan) {
        trace!(
            "event=animation_dropped module=animation requests={}",
            plan.requests().len()
        );
    }
}

/// Driver that buffers plans until the presentation layer drains them.
#[derive(Debug, Default)]
pub struct QueuedAnimationDriver {
    next_handle: u64,
    pending: Vec<AnimationPlan>,
}

impl QueuedAnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plans started since the last drain, oldest first.
    pub fn pending(&self) -> &[AnimationPlan] {
        &self.pending
    }

    /// Takes every buffered plan, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<AnimationPlan> {
        std::mem::take(&mut self.pending)
    }
}

impl AnimationDriver for QueuedAnimationDriver {
    fn create_handle(&mut self, initial: f64) -> AnimationHandle {
        self.next_handle += 1;
        AnimationHandle::new(self.next_handle, initial)
    }

    fn start(&mut self, plan: AnimationPlan) {
        self.pending.push(plan);
    }
}
