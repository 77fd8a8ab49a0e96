//! Derived, render-ready view of the task list.
//!
//! # Invariants
//! - Counts are recomputed from the items on every call; nothing is cached.
//! - Snapshots are plain data and do not borrow the store.

use crate::model::task::Task;
use serde::Serialize;

/// Header title shown above the list.
pub const HEADER_TITLE: &str = "Task Manager";
/// Placeholder shown when the list is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one below!";
/// Placeholder shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";

/// Counts tasks whose `completed` flag is `false`.
pub fn incomplete_count(items: &[Task]) -> usize {
    items.iter().filter(|task| !task.is_completed()).count()
}

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// `true` while the removal fade is running.
    pub pending_removal: bool,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            text: task.text().as_str().to_string(),
            completed: task.is_completed(),
            pending_removal: task.is_pending_removal(),
        }
    }
}

/// Full screen snapshot consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub title: String,
    pub items: Vec<TaskView>,
    pub remaining_count: usize,
    /// Header counter text, e.g. `2 remaining`.
    pub remaining_label: String,
    /// Set only when `items` is empty.
    pub empty_message: Option<String>,
    /// Hint text for the empty "add task" field.
    pub input_placeholder: String,
}

impl TaskListView {
    pub fn from_tasks(items: &[Task]) -> Self {
        let remaining_count = incomplete_count(items);
        Self {
            title: HEADER_TITLE.to_string(),
            items: items.iter().map(TaskView::from).collect(),
            remaining_count,
            remaining_label: format!("{remaining_count} remaining"),
            empty_message: items.is_empty().then(|| EMPTY_LIST_MESSAGE.to_string()),
            input_placeholder: INPUT_PLACEHOLDER.to_string(),
        }
    }
}
