//! Draft text collector for the "add task" field.
//!
//! # Responsibility
//! - Stage one draft string until the user submits it.
//! - Reject blank drafts with a user-facing notice instead of mutating state.
//!
//! # Invariants
//! - The draft is cleared only after a successful submit.
//! - The store only ever receives trimmed, non-empty text.

use crate::animation::AnimationDriver;
use crate::model::task::{TaskId, TaskText, TaskTextError};
use crate::store::task_store::TaskListStore;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPTY_TASK_TITLE: &str = "Empty Task";
const EMPTY_TASK_MESSAGE: &str = "Please enter a task description";
const TASK_TOO_LONG_TITLE: &str = "Task Too Long";

/// Blocking message the presentation layer shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Input submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyTask,
    TooLong { max: usize, actual: usize },
}

impl InputError {
    /// Notice to show for this error.
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptyTask => Notice {
                title: EMPTY_TASK_TITLE.to_string(),
                message: EMPTY_TASK_MESSAGE.to_string(),
            },
            Self::TooLong { max, .. } => Notice {
                title: TASK_TOO_LONG_TITLE.to_string(),
                message: format!("Please keep the task under {max} characters"),
            },
        }
    }
}

impl From<TaskTextError> for InputError {
    fn from(value: TaskTextError) -> Self {
        match value {
            TaskTextError::Empty => Self::EmptyTask,
            TaskTextError::TooLong { max, actual } => Self::TooLong { max, actual },
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTask => write!(f, "task description is empty"),
            Self::TooLong { max, actual } => {
                write!(f, "task description is {actual} chars, limit is {max}")
            }
        }
    }
}

impl Error for InputError {}

/// Single-field staging buffer for new tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    draft: String,
    max_text_chars: Option<usize>,
}

impl TaskInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector that also enforces a char limit on submit.
    pub fn with_limit(max_text_chars: Option<usize>) -> Self {
        Self {
            draft: String::new(),
            max_text_chars,
        }
    }

    /// Replaces the staged draft (called on every keystroke).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Commits the draft as a new task.
    ///
    /// # Errors
    /// - `InputError::EmptyTask` when the draft is blank; the draft is kept.
    /// - `InputError::TooLong` when a limit is configured and exceeded.
    pub fn submit<D: AnimationDriver>(
        &mut self,
        store: &mut TaskListStore<D>,
    ) -> Result<TaskId, InputError> {
        let text = match TaskText::parse_with_limit(&self.draft, self.max_text_chars) {
            Ok(text) => text,
            Err(err) => {
                debug!("event=input_submit module=input status=rejected reason={err}");
                return Err(err.into());
            }
        };

        let id = store.add(text);
        self.clear();
        Ok(id)
    }
}
