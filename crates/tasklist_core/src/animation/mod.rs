//! Animation instructions emitted by the core.
//!
//! # Responsibility
//! - Describe "drive this value" requests without owning their execution.
//! - Let the presentation runtime (or a no-op driver) decide how to animate.
//!
//! # Invariants
//! - Handles are opaque: the core never reads an animated value back.
//! - Only the removal fade carries a completion ticket.

pub mod driver;
pub mod handle;

pub use driver::{AnimationDriver, NoopAnimationDriver, QueuedAnimationDriver};
pub use handle::{
    AnimationHandle, AnimationPlan, AnimationRequest, Easing, FeedbackSignal, RemovalTicket,
};
