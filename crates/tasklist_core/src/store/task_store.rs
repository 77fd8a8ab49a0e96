//! Task list store and two-phase removal.
//!
//! # Responsibility
//! - Provide the only mutation entry points for tasks.
//! - Keep the removal fade visible as an explicit `PendingRemoval` phase.
//!
//! # Invariants
//! - A task leaves `items` only through `complete_removal` with its ticket.
//! - Each task gets at most one removal ticket.
//! - `incomplete_count` is always a fresh scan of `items`.

use crate::animation::{
    AnimationDriver, AnimationPlan, AnimationRequest, FeedbackSignal, NoopAnimationDriver,
    RemovalTicket,
};
use crate::config::{ConfigError, TaskListConfig};
use crate::model::task::{Task, TaskId, TaskPhase, TaskText};
use crate::view::incomplete_count;
use log::{debug, info, warn};

const FEEDBACK_RESTING_VALUE: f64 = 1.0;
const APPEARANCE_TARGET: f64 = 1.0;
const REMOVAL_TARGET: f64 = 0.0;

/// Result of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Fade-out started; the task is deleted when `ticket` completes.
    Started(RemovalTicket),
    /// A fade-out for this task is already in flight; nothing scheduled.
    AlreadyPending(RemovalTicket),
    /// No task with that id.
    NotFound,
}

/// Ordered, in-memory task collection with animation side effects.
pub struct TaskListStore<D: AnimationDriver = NoopAnimationDriver> {
    items: Vec<Task>,
    driver: D,
    config: TaskListConfig,
    feedback: FeedbackSignal,
    next_ticket: u64,
}

impl TaskListStore<NoopAnimationDriver> {
    /// Creates an empty store that drops all animation requests.
    pub fn headless() -> Self {
        Self::new(NoopAnimationDriver::new())
    }
}

impl<D: AnimationDriver> TaskListStore<D> {
    /// Creates an empty store with default timings.
    pub fn new(driver: D) -> Self {
        Self::build(driver, TaskListConfig::default())
    }

    /// Creates an empty store with caller-provided timings.
    ///
    /// # Errors
    /// - Returns the `TaskListConfig::validate` error for out-of-range values;
    ///   nothing reaches the driver in that case.
    pub fn with_config(driver: D, config: TaskListConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(driver, config))
    }

    fn build(mut driver: D, config: TaskListConfig) -> Self {
        let feedback = FeedbackSignal::new(
            driver.create_handle(FEEDBACK_RESTING_VALUE),
            config.pulse_dim_to,
            config.pulse_step_ms,
        );
        Self {
            items: Vec::new(),
            driver,
            config,
            feedback,
            next_ticket: 0,
        }
    }

    /// Appends a new incomplete task and starts its appearance animation.
    ///
    /// # Contract
    /// - Always succeeds; blank text is unrepresentable as `TaskText`.
    /// - The returned id differs from every id currently in the store.
    /// - Starts opacity `initial -> 1` (timing) and scale `initial -> 1`
    ///   (spring) in parallel.
    pub fn add(&mut self, text: TaskText) -> TaskId {
        let id = self.fresh_id();
        let opacity = self.driver.create_handle(self.config.initial_opacity);
        let scale = self.driver.create_handle(self.config.initial_scale);
        let text_chars = text.char_len();

        self.items.push(Task::new(id, text, opacity, scale));
        self.driver.start(AnimationPlan::Parallel(vec![
            AnimationRequest::timing(opacity, APPEARANCE_TARGET, self.config.fade_in_ms),
            AnimationRequest::spring(scale, APPEARANCE_TARGET, self.config.spring_friction),
        ]));

        info!(
            "event=task_add module=store status=ok id={} text_chars={} len={}",
            id,
            text_chars,
            self.items.len()
        );
        id
    }

    /// Flips the completion flag of `id` and pulses the shared feedback value.
    ///
    /// Returns `false` (and does nothing) when `id` is unknown. Tasks that are
    /// fading out can still be toggled.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.items.iter_mut().find(|task| task.id() == id) else {
            debug!("event=task_toggle module=store status=not_found id={id}");
            return false;
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.driver.start(self.feedback.pulse_plan());

        info!("event=task_toggle module=store status=ok id={id} completed={completed}");
        true
    }

    /// Starts the removal fade for `id`.
    ///
    /// The task stays in `items` until `complete_removal` is called with the
    /// returned ticket. Repeated calls for the same task return
    /// `AlreadyPending` and schedule nothing.
    pub fn remove(&mut self, id: TaskId) -> RemovalOutcome {
        let Some(index) = self.position(id) else {
            debug!("event=task_remove module=store status=not_found id={id}");
            return RemovalOutcome::NotFound;
        };

        if let TaskPhase::PendingRemoval { ticket } = self.items[index].phase {
            debug!("event=task_remove module=store status=already_pending id={id} ticket={ticket}");
            return RemovalOutcome::AlreadyPending(ticket);
        }

        self.next_ticket += 1;
        let ticket = RemovalTicket::from_raw(self.next_ticket);
        let task = &mut self.items[index];
        task.phase = TaskPhase::PendingRemoval { ticket };
        let opacity = task.appearance_opacity();

        self.driver.start(AnimationPlan::Single(
            AnimationRequest::timing(opacity, REMOVAL_TARGET, self.config.fade_out_ms)
                .with_completion(ticket),
        ));

        info!("event=task_remove module=store status=pending id={id} ticket={ticket}");
        RemovalOutcome::Started(ticket)
    }

    /// Animation-complete callback for a removal fade.
    ///
    /// Deletes exactly the task holding `ticket` and returns it. Unknown or
    /// already consumed tickets are ignored and return `None`.
    pub fn complete_removal(&mut self, ticket: RemovalTicket) -> Option<Task> {
        let Some(index) = self
            .items
            .iter()
            .position(|task| task.phase == TaskPhase::PendingRemoval { ticket })
        else {
            debug!("event=task_removed module=store status=stale_ticket ticket={ticket}");
            return None;
        };

        let removed = self.items.remove(index);
        info!(
            "event=task_removed module=store status=ok id={} ticket={} len={}",
            removed.id(),
            ticket,
            self.items.len()
        );
        Some(removed)
    }

    /// Tasks in display order, including ones that are fading out.
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.items.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of tasks not yet completed.
    pub fn incomplete_count(&self) -> usize {
        incomplete_count(&self.items)
    }

    /// Global pulse value for presentation layers that want the toggle feedback.
    pub fn feedback(&self) -> FeedbackSignal {
        self.feedback
    }

    pub fn config(&self) -> &TaskListConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|task| task.id() == id)
    }

    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new();
            if !self.contains(id) {
                return id;
            }
            warn!("event=task_id_collision module=store status=retry id={id}");
        }
    }
}
