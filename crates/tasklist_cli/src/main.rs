//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tasklist_core` linkage without a Flutter runtime.
//! - Walk one scripted session: every argument becomes a task, the first one is
//!   completed and then deleted through the confirm + fade-complete path.

use tasklist_core::{
    AnimationPlan, ConfirmationChoice, DeleteResolution, QueuedAnimationDriver, RemovalOutcome,
    TaskListService, TaskListView,
};

fn main() {
    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    let mut service = TaskListService::new(QueuedAnimationDriver::new());
    for arg in std::env::args().skip(1) {
        service.set_input_text(arg);
        if let Err(err) = service.submit_input() {
            let notice = err.notice();
            println!("rejected: {}: {}", notice.title, notice.message);
        }
    }
    print_view(&service.snapshot());

    let Some(first) = service.store().items().first().map(|task| task.id()) else {
        return;
    };
    service.toggle_complete(first);
    print_view(&service.snapshot());

    service.drain_animations();
    let resolution = service.resolve_delete(first, ConfirmationChoice::Confirmed);
    if let DeleteResolution::Removal(RemovalOutcome::Started(_)) = resolution {
        // No animation runtime here: report every fade as finished right away.
        let tickets = service
            .drain_animations()
            .iter()
            .filter_map(AnimationPlan::removal_ticket)
            .collect::<Vec<_>>();
        for ticket in tickets {
            service.animation_complete(ticket);
        }
    }
    print_view(&service.snapshot());
}

fn print_view(view: &TaskListView) {
    println!("{} ({})", view.title, view.remaining_label);
    if let Some(message) = &view.empty_message {
        println!("  {message}");
    }
    for item in &view.items {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {}", item.text);
    }
}
