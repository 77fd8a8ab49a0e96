use std::collections::HashSet;
use tasklist_core::{
    AnimationPlan, QueuedAnimationDriver, RemovalOutcome, TaskId, TaskListStore, TaskText,
};

fn text(value: &str) -> TaskText {
    TaskText::parse(value).unwrap()
}

fn store_with(texts: &[&str]) -> (TaskListStore<QueuedAnimationDriver>, Vec<TaskId>) {
    let mut store = TaskListStore::new(QueuedAnimationDriver::new());
    let ids = texts.iter().map(|value| store.add(text(value))).collect();
    store.driver_mut().drain();
    (store, ids)
}

#[test]
fn adds_append_in_order_with_distinct_ids() {
    let mut store = TaskListStore::headless();
    for index in 0..500 {
        store.add(text(&format!("task {index}")));
    }

    assert_eq!(store.len(), 500);
    let ids: HashSet<TaskId> = store.items().iter().map(|task| task.id()).collect();
    assert_eq!(ids.len(), 500);
    assert_eq!(store.items()[0].text().as_str(), "task 0");
    assert_eq!(store.items()[499].text().as_str(), "task 499");
}

#[test]
fn blank_text_never_reaches_the_store() {
    assert!(TaskText::parse("").is_err());
    assert!(TaskText::parse("   ").is_err());
}

#[test]
fn toggle_flips_once_and_twice_restores() {
    let (mut store, ids) = store_with(&["a"]);

    assert!(store.toggle_complete(ids[0]));
    assert!(store.get(ids[0]).unwrap().is_completed());
    assert!(store.toggle_complete(ids[0]));
    assert!(!store.get(ids[0]).unwrap().is_completed());
}

#[test]
fn toggle_unknown_id_is_noop() {
    let (mut store, ids) = store_with(&["a", "b"]);

    assert!(!store.toggle_complete(TaskId::new()));
    assert!(store.items().iter().all(|task| !task.is_completed()));
    assert_eq!(store.items().len(), ids.len());
    assert!(store.driver().pending().is_empty());
}

#[test]
fn incomplete_count_tracks_flags() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);
    store.toggle_complete(ids[1]);
    assert_eq!(store.incomplete_count(), 2);

    store.toggle_complete(ids[0]);
    assert_eq!(store.incomplete_count(), 1);
}

#[test]
fn removal_waits_for_completion_and_preserves_order() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);

    let RemovalOutcome::Started(ticket) = store.remove(ids[1]) else {
        panic!("remove should start");
    };
    assert_eq!(store.len(), 3, "task stays visible while fading");
    assert!(store.get(ids[1]).unwrap().is_pending_removal());

    let removed = store.complete_removal(ticket).expect("ticket is live");
    assert_eq!(removed.id(), ids[1]);
    let remaining: Vec<TaskId> = store.items().iter().map(|task| task.id()).collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
}

#[test]
fn double_remove_schedules_one_fade_and_one_deletion() {
    let (mut store, ids) = store_with(&["a", "b"]);

    let RemovalOutcome::Started(ticket) = store.remove(ids[0]) else {
        panic!("first remove should start");
    };
    assert_eq!(store.remove(ids[0]), RemovalOutcome::AlreadyPending(ticket));

    let fades: Vec<AnimationPlan> = store.driver_mut().drain();
    assert_eq!(fades.len(), 1);

    assert!(store.complete_removal(ticket).is_some());
    assert!(store.complete_removal(ticket).is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].id(), ids[1]);
}

#[test]
fn removals_complete_in_any_order() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);
    let RemovalOutcome::Started(first) = store.remove(ids[0]) else {
        panic!("remove a");
    };
    let RemovalOutcome::Started(third) = store.remove(ids[2]) else {
        panic!("remove c");
    };
    assert_ne!(first, third);

    store.complete_removal(third).unwrap();
    store.complete_removal(first).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].id(), ids[1]);
}

#[test]
fn operations_on_removed_task_are_noops() {
    let (mut store, ids) = store_with(&["a"]);
    let RemovalOutcome::Started(ticket) = store.remove(ids[0]) else {
        panic!("remove should start");
    };
    store.complete_removal(ticket).unwrap();

    assert!(!store.toggle_complete(ids[0]));
    assert_eq!(store.remove(ids[0]), RemovalOutcome::NotFound);
    assert!(store.is_empty());
}
