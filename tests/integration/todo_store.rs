//! Integration tests for the todo store.
//!
//! Covers the observable behavior a UI relies on: ordering of new tasks,
//! no-op handling of blank input and stale ids, filter projections, the
//! remaining counter and the single edit session.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use termtodo::tasks::TodoStore;
use termtodo_model::{Filter, Priority, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Builds a store holding `[A (active), B (completed)]`.
fn store_a_b() -> (TodoStore, TaskId, TaskId) {
    let mut store = TodoStore::new();
    let b = store.add("B", Priority::Medium).unwrap();
    store.toggle_complete(b);
    let a = store.add("A", Priority::Medium).unwrap();
    (store, a, b)
}

fn visible_texts(store: &TodoStore) -> Vec<&str> {
    store
        .visible_tasks()
        .into_iter()
        .map(|t| t.text.as_str())
        .collect()
}

// ===========================================================================
// Adding
// ===========================================================================

#[test]
fn blank_add_leaves_tasks_unchanged() {
    let (mut store, _, _) = store_a_b();
    let before = store.tasks().to_vec();
    for p in Priority::ALL {
        assert!(store.add("", p).is_none());
    }
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn add_grows_list_by_one_at_the_front() {
    let (mut store, _, _) = store_a_b();
    let len = store.len();
    let id = store.add("C", Priority::Low).unwrap();
    assert_eq!(store.len(), len + 1);
    assert_eq!(store.tasks()[0].id, id);
    assert!(!store.tasks()[0].completed);
}

#[test]
fn ids_stay_distinct_over_many_adds() {
    let mut store = TodoStore::new();
    for i in 0..100 {
        store.add(&format!("task {i}"), Priority::Medium);
    }
    let mut ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

// ===========================================================================
// Removing and toggling
// ===========================================================================

#[test]
fn double_remove_is_idempotent() {
    let (mut store, a, _) = store_a_b();
    assert!(store.remove(a));
    let after_first = store.tasks().to_vec();
    assert!(!store.remove(a));
    assert_eq!(store.tasks(), after_first.as_slice());
}

#[test]
fn toggle_twice_round_trips() {
    let (mut store, a, b) = store_a_b();
    for id in [a, b] {
        let original = store.get(id).unwrap().completed;
        store.toggle_complete(id);
        store.toggle_complete(id);
        assert_eq!(store.get(id).unwrap().completed, original);
    }
}

#[test]
fn stale_ids_are_ignored() {
    let (mut store, a, _) = store_a_b();
    store.remove(a);
    assert!(!store.toggle_complete(a));
    assert!(store.begin_edit(a).is_none());
    assert_eq!(store.len(), 1);
}

// ===========================================================================
// Filtering
// ===========================================================================

#[test]
fn filters_project_without_reordering() {
    let mut store = TodoStore::new();
    let ids: Vec<TaskId> = (0..6)
        .map(|i| store.add(&format!("t{i}"), Priority::Medium).unwrap())
        .collect();
    for id in ids.iter().step_by(2) {
        store.toggle_complete(*id);
    }

    store.set_filter(Filter::Active);
    let active: Vec<TaskId> = store.visible_tasks().iter().map(|t| t.id).collect();
    store.set_filter(Filter::Completed);
    let completed: Vec<TaskId> = store.visible_tasks().iter().map(|t| t.id).collect();
    store.set_filter(Filter::All);
    let all: Vec<TaskId> = store.visible_tasks().iter().map(|t| t.id).collect();

    assert_eq!(all.len(), 6);
    assert_eq!(active.len() + completed.len(), 6);
    assert!(active.iter().all(|id| !store.get(*id).unwrap().completed));
    assert!(completed.iter().all(|id| store.get(*id).unwrap().completed));

    // Each projection is a subsequence of the full list.
    let order = |v: &[TaskId]| -> Vec<usize> {
        v.iter()
            .map(|id| all.iter().position(|x| x == id).unwrap())
            .collect()
    };
    assert!(order(active.as_slice()).windows(2).all(|w| w[0] < w[1]));
    assert!(order(completed.as_slice()).windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn active_count_matches_active_view() {
    let (mut store, _, _) = store_a_b();
    store.add("C", Priority::High);
    store.set_filter(Filter::Active);
    assert_eq!(store.active_count(), store.visible_tasks().len());
}

#[test]
fn visible_tasks_is_side_effect_free() {
    let (mut store, _, _) = store_a_b();
    store.set_filter(Filter::Completed);
    let first = visible_texts(&store);
    let second = visible_texts(&store);
    assert_eq!(first, second);
    assert_eq!(store.len(), 2);
}

// ===========================================================================
// Edit sessions
// ===========================================================================

#[test]
fn blank_commit_keeps_session_and_text() {
    let (mut store, a, _) = store_a_b();
    store.begin_edit(a);
    assert!(!store.commit_edit("", Priority::High));
    assert_eq!(store.editing_id(), Some(a));
    assert_eq!(store.get(a).unwrap().text, "A");
}

#[test]
fn starting_second_edit_abandons_first_buffer() {
    let (mut store, a, b) = store_a_b();
    store.begin_edit(a);
    // A's edit is never committed; the user moves on to B.
    let session = store.begin_edit(b).unwrap();
    assert_eq!(session.id, b);
    assert_eq!(session.text, "B");

    assert!(store.commit_edit("B2", Priority::Low));
    assert_eq!(store.get(a).unwrap().text, "A");
    assert_eq!(store.get(a).unwrap().priority, Priority::Medium);
    assert_eq!(store.get(b).unwrap().text, "B2");
    assert!(store.editing().is_none());
}

#[test]
fn cancel_then_restart_reseeds_from_task() {
    let (mut store, a, _) = store_a_b();
    store.begin_edit(a);
    store.cancel_edit();
    assert!(store.editing().is_none());
    let session = store.begin_edit(a).unwrap();
    assert_eq!(session.text, "A");
    assert_eq!(session.priority, Priority::Medium);
}

#[test]
fn deleting_edited_task_ends_session() {
    let (mut store, a, _) = store_a_b();
    store.begin_edit(a);
    store.remove(a);
    assert!(store.editing_id().is_none());
    assert!(!store.commit_edit("ghost", Priority::High));
}

// ===========================================================================
// End-to-end scenario
// ===========================================================================

#[test]
fn add_filter_toggle_scenario() {
    let (mut store, a, b) = store_a_b();

    let c = store.add("C", Priority::High).unwrap();
    let order: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![c, a, b]);

    store.set_filter(Filter::Completed);
    assert_eq!(visible_texts(&store), ["B"]);

    store.toggle_complete(a);
    assert!(store.get(a).unwrap().completed);

    store.set_filter(Filter::Active);
    assert_eq!(visible_texts(&store), ["C"]);
    assert_eq!(store.active_count(), 1);
}
