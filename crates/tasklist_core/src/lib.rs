//! Core state and lifecycle logic for the task list screen.
//! This crate is the single source of truth for task invariants.

pub mod animation;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use animation::{
    AnimationDriver, AnimationHandle, AnimationPlan, AnimationRequest, Easing, FeedbackSignal,
    NoopAnimationDriver, QueuedAnimationDriver, RemovalTicket,
};
pub use config::{ConfigError, TaskListConfig};
pub use input::{InputError, Notice, TaskInput};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::task::{Task, TaskId, TaskIdError, TaskPhase, TaskText, TaskTextError};
pub use service::task_service::{
    ChoiceStyle, ConfirmationChoice, DeletePrompt, DeleteResolution, PromptChoice,
    TaskListService,
};
pub use store::task_store::{RemovalOutcome, TaskListStore};
pub use view::{incomplete_count, TaskListView, TaskView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
