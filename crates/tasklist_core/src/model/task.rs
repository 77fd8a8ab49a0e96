//! Task entity model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the list screen.
//! - Provide validated constructors for ids and text coming from UI input.
//!
//! # Invariants
//! - `id` and `text` are immutable after creation (no edit operation exists).
//! - `phase` is the source of truth for pending-removal state.
//! - Animation handles are created together with the task and never swapped.

use crate::animation::{AnimationHandle, RemovalTicket};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one task in the list.
///
/// Backed by a random v4 UUID, so two tasks added within the same clock tick
/// still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an externally provided UUID.
    ///
    /// # Errors
    /// - Returns `TaskIdError::Nil` for the nil UUID.
    pub fn from_uuid(value: Uuid) -> Result<Self, TaskIdError> {
        if value.is_nil() {
            return Err(TaskIdError::Nil);
        }
        Ok(Self(value))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| TaskIdError::Malformed(value.to_string()))?;
        Self::from_uuid(parsed)
    }
}

/// Task id parse errors for ids crossing the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIdError {
    Nil,
    Malformed(String),
}

impl Display for TaskIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "task id must not be the nil uuid"),
            Self::Malformed(value) => write!(f, "task id is not a valid uuid: `{value}`"),
        }
    }
}

impl Error for TaskIdError {}

/// Trimmed, non-empty task description.
///
/// The store only accepts this type, so whitespace-only text can never be
/// committed as a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Trims `raw` and rejects blank input.
    pub fn parse(raw: &str) -> Result<Self, TaskTextError> {
        Self::parse_with_limit(raw, None)
    }

    /// Trims `raw`, rejects blank input and enforces an optional char limit.
    ///
    /// # Errors
    /// - `TaskTextError::Empty` when `raw` is empty after trimming.
    /// - `TaskTextError::TooLong` when the trimmed text exceeds `max_chars`.
    pub fn parse_with_limit(raw: &str, max_chars: Option<usize>) -> Result<Self, TaskTextError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskTextError::Empty);
        }
        if let Some(max) = max_chars {
            let actual = trimmed.chars().count();
            if actual > max {
                return Err(TaskTextError::TooLong { max, actual });
            }
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in chars, used for metadata-only logging.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Display for TaskText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Task text validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskTextError {
    Empty,
    TooLong { max: usize, actual: usize },
}

impl Display for TaskTextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task text must not be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "task text is {actual} chars, limit is {max}")
            }
        }
    }
}

impl Error for TaskTextError {}

/// Lifecycle phase of a task that is still in the list.
///
/// `Removed` is not represented: a removed task no longer exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum TaskPhase {
    /// Visible and interactive.
    Active,
    /// Fade-out started; deleted when `ticket` is reported complete.
    PendingRemoval { ticket: RemovalTicket },
}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    /// Toggled by the store only.
    pub(crate) completed: bool,
    pub(crate) phase: TaskPhase,
    appearance_opacity: AnimationHandle,
    appearance_scale: AnimationHandle,
}

impl Task {
    /// Creates an active, incomplete task.
    ///
    /// Only the store calls this; it owns handle creation through its driver.
    pub(crate) fn new(
        id: TaskId,
        text: TaskText,
        appearance_opacity: AnimationHandle,
        appearance_scale: AnimationHandle,
    ) -> Self {
        Self {
            id,
            text,
            completed: false,
            phase: TaskPhase::Active,
            appearance_opacity,
            appearance_scale,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &TaskText {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    /// Returns whether a fade-out is in flight for this task.
    pub fn is_pending_removal(&self) -> bool {
        matches!(self.phase, TaskPhase::PendingRemoval { .. })
    }

    pub fn appearance_opacity(&self) -> AnimationHandle {
        self.appearance_opacity
    }

    pub fn appearance_scale(&self) -> AnimationHandle {
        self.appearance_scale
    }
}
