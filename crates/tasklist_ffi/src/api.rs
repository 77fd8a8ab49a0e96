//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single in-memory task list session for the app process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids and tickets cross the boundary as strings / integers only.
//! - State lives for the process lifetime; nothing is persisted.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AnimationPlan, AnimationRequest, ConfirmationChoice, DeleteResolution, Easing,
    QueuedAnimationDriver, RemovalOutcome, RemovalTicket, TaskId, TaskListConfig,
    TaskListService, TaskListView,
};

const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG_JSON";

type Session = TaskListService<QueuedAnimationDriver>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// `true` while the removal fade is running.
    pub pending_removal: bool,
}

/// Full screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshot {
    pub title: String,
    pub items: Vec<TaskItem>,
    pub remaining_count: u32,
    pub remaining_label: String,
    /// Placeholder text, set only when the list is empty.
    pub empty_message: Option<String>,
    /// Hint text for the empty input field.
    pub input_placeholder: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the action changed state.
    pub ok: bool,
    /// Affected task id, when there is one.
    pub task_id: Option<String>,
    /// Human-readable result for diagnostics.
    pub message: String,
    /// Blocking notice the UI must show (validation failures only).
    pub notice: Option<UserNotice>,
}

/// Blocking alert content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub title: String,
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
            notice: None,
        }
    }

    fn noop(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
            notice: None,
        }
    }
}

/// Delete confirmation dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePromptData {
    pub task_id: String,
    pub title: String,
    pub message: String,
    pub cancel_label: String,
    pub confirm_label: String,
}

/// One "drive value" instruction for the Flutter animation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep {
    pub handle_id: u64,
    pub initial: f64,
    pub target: f64,
    /// `timing` or `spring`.
    pub easing: String,
    pub duration_ms: Option<u32>,
    pub friction: Option<f64>,
    /// Report back through `task_animation_complete` when the step ends.
    pub removal_ticket: Option<u64>,
}

/// Group of steps started together (`parallel`/`single`) or chained (`sequence`).
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBatch {
    pub mode: String,
    pub steps: Vec<AnimationStep>,
}

/// Returns the current list snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_snapshot() -> TaskListSnapshot {
    to_snapshot(lock_session().snapshot())
}

/// Stages draft text from the input field.
#[flutter_rust_bridge::frb(sync)]
pub fn task_input_set_text(text: String) {
    lock_session().set_input_text(text);
}

/// Submits the staged draft as a new task.
///
/// # FFI contract
/// - Blank drafts return `ok=false` with a `notice` and leave state unchanged.
/// - On success the draft is cleared and `task_id` is set.
#[flutter_rust_bridge::frb(sync)]
pub fn task_input_submit() -> TaskActionResponse {
    match lock_session().submit_input() {
        Ok(id) => TaskActionResponse::success("Task added.", Some(id.to_string())),
        Err(err) => {
            let notice = err.notice();
            TaskActionResponse {
                ok: false,
                task_id: None,
                message: err.to_string(),
                notice: Some(UserNotice {
                    title: notice.title,
                    message: notice.message,
                }),
            }
        }
    }
}

/// Toggles completion for `task_id`. Unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_complete(task_id: String) -> TaskActionResponse {
    let Some(id) = parse_task_id(&task_id) else {
        return TaskActionResponse::noop("Task not found.");
    };
    if lock_session().toggle_complete(id) {
        TaskActionResponse::success("Task toggled.", Some(task_id))
    } else {
        TaskActionResponse::noop("Task not found.")
    }
}

/// Returns the delete confirmation dialog, or `None` when nothing can be deleted.
#[flutter_rust_bridge::frb(sync)]
pub fn task_request_delete(task_id: String) -> Option<DeletePromptData> {
    let id = parse_task_id(&task_id)?;
    let prompt = lock_session().request_delete(id)?;

    let label_for = |choice: ConfirmationChoice| {
        prompt
            .choices
            .iter()
            .find(|candidate| candidate.choice == choice)
            .map(|candidate| candidate.label.clone())
            .unwrap_or_default()
    };
    Some(DeletePromptData {
        task_id,
        cancel_label: label_for(ConfirmationChoice::Cancelled),
        confirm_label: label_for(ConfirmationChoice::Confirmed),
        title: prompt.title.clone(),
        message: prompt.message.clone(),
    })
}

/// Applies the user's answer to the delete dialog.
///
/// # FFI contract
/// - `confirmed=false` never changes state.
/// - `confirmed=true` starts the fade; the row stays until the fade is reported.
#[flutter_rust_bridge::frb(sync)]
pub fn task_resolve_delete(task_id: String, confirmed: bool) -> TaskActionResponse {
    let Some(id) = parse_task_id(&task_id) else {
        return TaskActionResponse::noop("Task not found.");
    };
    let choice = if confirmed {
        ConfirmationChoice::Confirmed
    } else {
        ConfirmationChoice::Cancelled
    };

    match lock_session().resolve_delete(id, choice) {
        DeleteResolution::Cancelled => TaskActionResponse::noop("Delete cancelled."),
        DeleteResolution::Removal(RemovalOutcome::Started(_)) => {
            TaskActionResponse::success("Delete started.", Some(task_id))
        }
        DeleteResolution::Removal(RemovalOutcome::AlreadyPending(_)) => {
            TaskActionResponse::noop("Delete already in progress.")
        }
        DeleteResolution::Removal(RemovalOutcome::NotFound) => {
            TaskActionResponse::noop("Task not found.")
        }
    }
}

/// Reports that the removal fade carrying `removal_ticket` finished.
///
/// Duplicate or stale tickets are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn task_animation_complete(removal_ticket: u64) -> TaskActionResponse {
    match lock_session().animation_complete(RemovalTicket::from_raw(removal_ticket)) {
        Some(task) => TaskActionResponse::success("Task removed.", Some(task.id().to_string())),
        None => TaskActionResponse::noop("No removal pending for ticket."),
    }
}

/// Takes every animation batch started since the previous call, oldest first.
#[flutter_rust_bridge::frb(sync)]
pub fn task_drain_animations() -> Vec<AnimationBatch> {
    lock_session()
        .drain_animations()
        .into_iter()
        .map(to_animation_batch)
        .collect()
}

/// Handle id of the shared toggle-feedback value, so the UI can bind it.
#[flutter_rust_bridge::frb(sync)]
pub fn task_feedback_handle_id() -> u64 {
    lock_session().store().feedback().handle().id()
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION
        .get_or_init(|| Mutex::new(new_session()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn new_session() -> Session {
    match TaskListService::with_config(QueuedAnimationDriver::new(), resolve_config()) {
        Ok(session) => session,
        Err(err) => {
            warn!("event=session_init module=ffi status=fallback_default error={err}");
            TaskListService::new(QueuedAnimationDriver::new())
        }
    }
}

fn resolve_config() -> TaskListConfig {
    let Ok(raw) = std::env::var(CONFIG_ENV_VAR) else {
        return TaskListConfig::default();
    };
    if raw.trim().is_empty() {
        return TaskListConfig::default();
    }
    match TaskListConfig::from_json_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=config_load module=ffi status=fallback_default error={err}");
            TaskListConfig::default()
        }
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse::<TaskId>().ok()
}

fn to_snapshot(view: TaskListView) -> TaskListSnapshot {
    TaskListSnapshot {
        title: view.title,
        items: view
            .items
            .into_iter()
            .map(|item| TaskItem {
                id: item.id,
                text: item.text,
                completed: item.completed,
                pending_removal: item.pending_removal,
            })
            .collect(),
        remaining_count: u32::try_from(view.remaining_count).unwrap_or(u32::MAX),
        remaining_label: view.remaining_label,
        empty_message: view.empty_message,
        input_placeholder: view.input_placeholder,
    }
}

fn to_animation_batch(plan: AnimationPlan) -> AnimationBatch {
    let mode = match &plan {
        AnimationPlan::Parallel(_) => "parallel",
        AnimationPlan::Sequence(_) => "sequence",
        AnimationPlan::Single(_) => "single",
    };
    AnimationBatch {
        mode: mode.to_string(),
        steps: plan.requests().iter().map(to_animation_step).collect(),
    }
}

fn to_animation_step(request: &AnimationRequest) -> AnimationStep {
    let (easing, duration_ms, friction) = match request.easing {
        Easing::Timing { duration_ms } => ("timing", Some(duration_ms), None),
        Easing::Spring { friction } => ("spring", None, Some(friction)),
    };
    AnimationStep {
        handle_id: request.handle.id(),
        initial: request.handle.initial(),
        target: request.target,
        easing: easing.to_string(),
        duration_ms,
        friction,
        removal_ticket: request.on_complete.map(|ticket| ticket.raw()),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, task_animation_complete, task_drain_animations,
        task_input_set_text, task_input_submit, task_list_snapshot, task_request_delete,
        task_resolve_delete, task_toggle_complete,
    };
    use std::sync::{Mutex, MutexGuard};
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn blank_submit_returns_notice() {
        let _guard = session_guard();
        task_input_set_text("   ".to_string());
        let response = task_input_submit();
        assert!(!response.ok);
        let notice = response.notice.expect("blank submit must carry a notice");
        assert_eq!(notice.title, "Empty Task");
    }

    #[test]
    fn unknown_or_malformed_ids_are_noops() {
        let _guard = session_guard();
        assert!(!task_toggle_complete("not-a-uuid".to_string()).ok);
        assert!(task_request_delete("not-a-uuid".to_string()).is_none());
        assert!(!task_resolve_delete("not-a-uuid".to_string(), true).ok);
        assert!(!task_animation_complete(u64::MAX).ok);
    }

    #[test]
    fn add_toggle_delete_flow_through_ffi() {
        let _guard = session_guard();
        let text = unique_token("ffi-task");
        task_input_set_text(format!("  {text}  "));
        let created = task_input_submit();
        assert!(created.ok, "{}", created.message);
        let task_id = created.task_id.expect("created task id");

        let snapshot = task_list_snapshot();
        assert_eq!(snapshot.input_placeholder, "Add a new task...");
        let item = snapshot
            .items
            .iter()
            .find(|item| item.id == task_id)
            .expect("task listed");
        assert_eq!(item.text, text);
        assert!(!item.completed);

        assert!(task_toggle_complete(task_id.clone()).ok);
        assert!(task_list_snapshot()
            .items
            .iter()
            .any(|item| item.id == task_id && item.completed));

        let prompt = task_request_delete(task_id.clone()).expect("prompt for live task");
        assert_eq!(prompt.confirm_label, "Delete");
        assert_eq!(prompt.cancel_label, "Cancel");

        task_drain_animations();
        assert!(!task_resolve_delete(task_id.clone(), false).ok);
        assert!(task_resolve_delete(task_id.clone(), true).ok);
        assert!(!task_resolve_delete(task_id.clone(), true).ok);

        let batches = task_drain_animations();
        assert_eq!(batches.len(), 1, "one fade for a double confirm");
        assert_eq!(batches[0].mode, "single");
        let ticket = batches[0].steps[0]
            .removal_ticket
            .expect("fade step carries a ticket");
        assert!(task_list_snapshot()
            .items
            .iter()
            .any(|item| item.id == task_id && item.pending_removal));

        let removed = task_animation_complete(ticket);
        assert!(removed.ok);
        assert_eq!(removed.task_id.as_deref(), Some(task_id.as_str()));
        assert!(!task_animation_complete(ticket).ok);
        assert!(task_list_snapshot()
            .items
            .iter()
            .all(|item| item.id != task_id));
    }

    #[test]
    fn finished_ticket_never_removes_a_later_task() {
        let _guard = session_guard();
        let first = add_and_confirm_delete("first-task");
        assert!(task_animation_complete(first.1).ok);

        let second = add_and_confirm_delete("second-task");
        assert_ne!(first.1, second.1, "tickets are never reused");

        assert!(!task_animation_complete(first.1).ok);
        assert!(task_list_snapshot()
            .items
            .iter()
            .any(|item| item.id == second.0 && item.pending_removal));

        assert!(task_animation_complete(second.1).ok);
    }

    fn add_and_confirm_delete(prefix: &str) -> (String, u64) {
        task_input_set_text(unique_token(prefix));
        let task_id = task_input_submit().task_id.expect("created task id");
        task_drain_animations();
        assert!(task_resolve_delete(task_id.clone(), true).ok);
        let ticket = task_drain_animations()
            .into_iter()
            .flat_map(|batch| batch.steps)
            .find_map(|step| step.removal_ticket)
            .expect("fade step carries a ticket");
        (task_id, ticket)
    }

    // The session is process-global, so tests that touch it run one at a time.
    fn session_guard() -> MutexGuard<'static, ()> {
        static TEST_LOCK: Mutex<()> = Mutex::new(());
        TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
