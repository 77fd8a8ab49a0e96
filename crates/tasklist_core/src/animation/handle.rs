//! Animation handle and request shapes.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Opaque reference to an animatable numeric value owned by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationHandle {
    id: u64,
    initial: f64,
}

impl AnimationHandle {
    pub fn new(id: u64, initial: f64) -> Self {
        Self { id, initial }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Value the runtime should show before any request runs.
    pub fn initial(&self) -> f64 {
        self.initial
    }
}

/// Interpolation curve for one request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Easing {
    /// Fixed-duration tween.
    Timing { duration_ms: u32 },
    /// Physics spring; lower friction bounces more.
    Spring { friction: f64 },
}

/// Completion token for a removal fade.
///
/// The runtime hands it back to `TaskListStore::complete_removal` once the
/// fade has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RemovalTicket(u64);

impl RemovalTicket {
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for RemovalTicket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drive `handle` toward `target` using `easing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationRequest {
    pub handle: AnimationHandle,
    pub target: f64,
    pub easing: Easing,
    /// Set only for removal fades.
    pub on_complete: Option<RemovalTicket>,
}

impl AnimationRequest {
    pub fn timing(handle: AnimationHandle, target: f64, duration_ms: u32) -> Self {
        Self {
            handle,
            target,
            easing: Easing::Timing { duration_ms },
            on_complete: None,
        }
    }

    pub fn spring(handle: AnimationHandle, target: f64, friction: f64) -> Self {
        Self {
            handle,
            target,
            easing: Easing::Spring { friction },
            on_complete: None,
        }
    }

    pub fn with_completion(mut self, ticket: RemovalTicket) -> Self {
        self.on_complete = Some(ticket);
        self
    }
}

/// Group of requests started together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "steps")]
pub enum AnimationPlan {
    /// All requests start at once.
    Parallel(Vec<AnimationRequest>),
    /// Each request starts when the previous one finishes.
    Sequence(Vec<AnimationRequest>),
    /// One request on its own.
    Single(AnimationRequest),
}

impl AnimationPlan {
    pub fn requests(&self) -> &[AnimationRequest] {
        match self {
            Self::Parallel(requests) | Self::Sequence(requests) => requests,
            Self::Single(request) => std::slice::from_ref(request),
        }
    }

    /// Returns the removal ticket carried by any request in this plan.
    pub fn removal_ticket(&self) -> Option<RemovalTicket> {
        self.requests()
            .iter()
            .find_map(|request| request.on_complete)
    }
}

/// Shared "dim then restore" feedback value pulsed on every completion toggle.
///
/// It is not tied to any task; the presentation layer may ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedbackSignal {
    handle: AnimationHandle,
    dim_to: f64,
    step_ms: u32,
}

impl FeedbackSignal {
    pub fn new(handle: AnimationHandle, dim_to: f64, step_ms: u32) -> Self {
        Self {
            handle,
            dim_to,
            step_ms,
        }
    }

    pub fn handle(&self) -> AnimationHandle {
        self.handle
    }

    /// Sequence: dim to `dim_to`, then back to the resting value.
    pub fn pulse_plan(&self) -> AnimationPlan {
        AnimationPlan::Sequence(vec![
            AnimationRequest::timing(self.handle, self.dim_to, self.step_ms),
            AnimationRequest::timing(self.handle, self.handle.initial(), self.step_ms),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationHandle, AnimationPlan, AnimationRequest, Easing, FeedbackSignal, RemovalTicket};

    #[test]
    fn pulse_plan_dims_then_restores_resting_value() {
        let signal = FeedbackSignal::new(AnimationHandle::new(7, 1.0), 0.5, 200);
        let plan = signal.pulse_plan();

        let AnimationPlan::Sequence(steps) = &plan else {
            panic!("pulse must be a sequence, got {plan:?}");
        };
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].target, 0.5);
        assert_eq!(steps[1].target, 1.0);
        assert!(steps
            .iter()
            .all(|step| step.easing == Easing::Timing { duration_ms: 200 }));
        assert_eq!(plan.removal_ticket(), None);
    }

    #[test]
    fn removal_ticket_is_found_in_single_plan() {
        let ticket = RemovalTicket::from_raw(3);
        let plan = AnimationPlan::Single(
            AnimationRequest::timing(AnimationHandle::new(1, 1.0), 0.0, 300).with_completion(ticket),
        );
        assert_eq!(plan.removal_ticket(), Some(ticket));
    }

    #[test]
    fn plan_serializes_with_mode_tag() {
        let plan = AnimationPlan::Parallel(vec![AnimationRequest::spring(
            AnimationHandle::new(2, 0.8),
            1.0,
            4.0,
        )]);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mode"], "parallel");
        assert_eq!(json["steps"][0]["easing"]["kind"], "spring");
        assert_eq!(json["steps"][0]["handle"]["initial"], 0.8);
    }
}
