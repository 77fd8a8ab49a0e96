//! Task list use-case service.
//!
//! # Responsibility
//! - Own the store and the draft input for one screen session.
//! - Gate deletion behind an explicit confirm/cancel choice.
//!
//! # Invariants
//! - Deletion never starts without `ConfirmationChoice::Confirmed`.
//! - Prompts are only issued for tasks that are present and not already fading.
//! - Cancel-delete after confirmation is not supported.

use crate::animation::{AnimationDriver, QueuedAnimationDriver, RemovalTicket};
use crate::config::{ConfigError, TaskListConfig};
use crate::input::{InputError, TaskInput};
use crate::model::task::{Task, TaskId};
use crate::store::task_store::{RemovalOutcome, TaskListStore};
use crate::view::TaskListView;
use log::{debug, info};
use serde::Serialize;

const DELETE_PROMPT_TITLE: &str = "Delete Task";
const DELETE_PROMPT_MESSAGE: &str = "Are you sure you want to delete this task?";
const DELETE_CANCEL_LABEL: &str = "Cancel";
const DELETE_CONFIRM_LABEL: &str = "Delete";

/// Visual weight of one prompt choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStyle {
    Cancel,
    Destructive,
}

/// One button of the delete prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptChoice {
    pub label: String,
    pub style: ChoiceStyle,
    pub choice: ConfirmationChoice,
}

/// User answer to a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationChoice {
    Cancelled,
    Confirmed,
}

/// Confirmation dialog request for deleting one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePrompt {
    pub task_id: TaskId,
    pub title: String,
    pub message: String,
    pub choices: Vec<PromptChoice>,
}

impl DeletePrompt {
    fn for_task(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: DELETE_PROMPT_TITLE.to_string(),
            message: DELETE_PROMPT_MESSAGE.to_string(),
            choices: vec![
                PromptChoice {
                    label: DELETE_CANCEL_LABEL.to_string(),
                    style: ChoiceStyle::Cancel,
                    choice: ConfirmationChoice::Cancelled,
                },
                PromptChoice {
                    label: DELETE_CONFIRM_LABEL.to_string(),
                    style: ChoiceStyle::Destructive,
                    choice: ConfirmationChoice::Confirmed,
                },
            ],
        }
    }
}

/// Outcome of answering a delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResolution {
    /// User declined; nothing changed.
    Cancelled,
    /// User confirmed; store result of the removal request.
    Removal(RemovalOutcome),
}

/// Screen-level orchestration over store, input and delete confirmation.
pub struct TaskListService<D: AnimationDriver = QueuedAnimationDriver> {
    store: TaskListStore<D>,
    input: TaskInput,
}

impl<D: AnimationDriver> TaskListService<D> {
    /// Creates a service using the provided driver and default config.
    pub fn new(driver: D) -> Self {
        Self {
            store: TaskListStore::new(driver),
            input: TaskInput::new(),
        }
    }

    /// Creates a service with caller-provided timings and input bounds.
    ///
    /// Rejects configs that fail `TaskListConfig::validate`.
    pub fn with_config(driver: D, config: TaskListConfig) -> Result<Self, ConfigError> {
        let input = TaskInput::with_limit(config.max_text_chars);
        Ok(Self {
            store: TaskListStore::with_config(driver, config)?,
            input,
        })
    }

    /// Replaces the staged draft.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Submits the staged draft as a new task.
    pub fn submit_input(&mut self) -> Result<TaskId, InputError> {
        self.input.submit(&mut self.store)
    }

    /// Toggles completion; `false` for unknown ids.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        self.store.toggle_complete(id)
    }

    /// Builds the confirmation prompt for deleting `id`.
    ///
    /// Returns `None` for unknown ids and for tasks already fading out.
    pub fn request_delete(&self, id: TaskId) -> Option<DeletePrompt> {
        match self.store.get(id) {
            Some(task) if !task.is_pending_removal() => Some(DeletePrompt::for_task(id)),
            Some(_) => {
                debug!("event=delete_prompt module=service status=already_pending id={id}");
                None
            }
            None => {
                debug!("event=delete_prompt module=service status=not_found id={id}");
                None
            }
        }
    }

    /// Applies the user's answer to a delete prompt.
    ///
    /// The task may have disappeared while the prompt was open; that case
    /// resolves to `Removal(RemovalOutcome::NotFound)`.
    pub fn resolve_delete(
        &mut self,
        task_id: TaskId,
        choice: ConfirmationChoice,
    ) -> DeleteResolution {
        match choice {
            ConfirmationChoice::Cancelled => {
                info!("event=delete_prompt module=service status=cancelled id={task_id}");
                DeleteResolution::Cancelled
            }
            ConfirmationChoice::Confirmed => DeleteResolution::Removal(self.store.remove(task_id)),
        }
    }

    /// Forwards the removal-fade completion to the store.
    pub fn animation_complete(&mut self, ticket: RemovalTicket) -> Option<Task> {
        self.store.complete_removal(ticket)
    }

    /// Render-ready snapshot of the current list.
    pub fn snapshot(&self) -> TaskListView {
        TaskListView::from_tasks(self.store.items())
    }

    /// Read-only store access; mutations go through the use-case methods.
    pub fn store(&self) -> &TaskListStore<D> {
        &self.store
    }
}

impl TaskListService<QueuedAnimationDriver> {
    /// Takes every animation plan started since the last call.
    pub fn drain_animations(&mut self) -> Vec<crate::animation::AnimationPlan> {
        self.store.driver_mut().drain()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChoiceStyle, ConfirmationChoice, DeleteResolution, TaskListService};
    use crate::animation::QueuedAnimationDriver;
    use crate::store::task_store::RemovalOutcome;

    fn service_with(texts: &[&str]) -> TaskListService<QueuedAnimationDriver> {
        let mut service = TaskListService::new(QueuedAnimationDriver::new());
        for text in texts {
            service.set_input_text(*text);
            service.submit_input().expect("submit should succeed");
        }
        service.drain_animations();
        service
    }

    #[test]
    fn prompt_offers_cancel_and_destructive_delete() {
        let service = service_with(&["a"]);
        let id = service.store().items()[0].id();

        let prompt = service.request_delete(id).expect("prompt for present task");
        assert_eq!(prompt.title, "Delete Task");
        assert_eq!(prompt.message, "Are you sure you want to delete this task?");
        assert_eq!(prompt.choices[0].label, "Cancel");
        assert_eq!(prompt.choices[0].style, ChoiceStyle::Cancel);
        assert_eq!(prompt.choices[1].label, "Delete");
        assert_eq!(prompt.choices[1].style, ChoiceStyle::Destructive);
    }

    #[test]
    fn cancel_leaves_task_and_schedules_nothing() {
        let mut service = service_with(&["a"]);
        let id = service.store().items()[0].id();

        let resolution = service.resolve_delete(id, ConfirmationChoice::Cancelled);
        assert_eq!(resolution, DeleteResolution::Cancelled);
        assert!(!service.store().items()[0].is_pending_removal());
        assert!(service.drain_animations().is_empty());
    }

    #[test]
    fn asking_to_delete_starts_nothing_until_confirmed() {
        let mut service = service_with(&["a"]);
        let id = service.store().items()[0].id();

        service.request_delete(id).expect("prompt for present task");
        assert!(!service.store().items()[0].is_pending_removal());
        assert!(service.drain_animations().is_empty());

        service.resolve_delete(id, ConfirmationChoice::Confirmed);
        assert!(service.store().items()[0].is_pending_removal());
        assert_eq!(service.drain_animations().len(), 1);
    }

    #[test]
    fn with_config_rejects_invalid_timings() {
        let config = crate::config::TaskListConfig {
            pulse_step_ms: 0,
            ..crate::config::TaskListConfig::default()
        };
        assert!(TaskListService::with_config(QueuedAnimationDriver::new(), config).is_err());
    }

    #[test]
    fn no_prompt_while_fade_is_running() {
        let mut service = service_with(&["a"]);
        let id = service.store().items()[0].id();

        let resolution = service.resolve_delete(id, ConfirmationChoice::Confirmed);
        assert!(matches!(
            resolution,
            DeleteResolution::Removal(RemovalOutcome::Started(_))
        ));
        assert!(service.request_delete(id).is_none());
    }
}
