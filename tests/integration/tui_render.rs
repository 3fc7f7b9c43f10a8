//! Integration tests for TUI rendering.
//!
//! Draws the full UI into a ratatui `TestBackend` and checks that the
//! screen reflects store state: visible tasks, the remaining counter,
//! empty-list messages and the inline editor.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use termtodo::app::App;
use termtodo::tasks::TodoStore;
use termtodo::ui;
use termtodo_model::{Filter, Priority};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Renders `app` and returns the screen as one string per row.
fn render(app: &App) -> Vec<String> {
    let backend = TestBackend::new(100, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ===========================================================================
// Task list
// ===========================================================================

#[test]
fn demo_tasks_are_rendered_with_badges() {
    let app = App::with_store(TodoStore::with_demo_tasks());
    let screen = render(&app);

    assert!(screen_contains(&screen, "Finalize project proposal"));
    assert!(screen_contains(&screen, "Schedule team meeting"));
    assert!(screen_contains(&screen, "Update weekly report"));
    assert!(screen_contains(&screen, "[High]"));
    assert!(screen_contains(&screen, "[Low]"));
    assert!(screen_contains(&screen, "[✓]"));
}

#[test]
fn counter_shows_active_tasks() {
    let app = App::with_store(TodoStore::with_demo_tasks());
    assert!(screen_contains(&render(&app), "2 tasks left"));
}

#[test]
fn counter_is_singular_for_one_task() {
    let mut store = TodoStore::new();
    store.add("only one", Priority::Medium);
    let app = App::with_store(store);
    assert!(screen_contains(&render(&app), "1 task left"));
}

#[test]
fn status_bar_shows_done_count() {
    let app = App::with_store(TodoStore::with_demo_tasks());
    assert!(screen_contains(&render(&app), "3 total, 1 done"));
}

#[test]
fn long_list_scrolls_to_selected_row() {
    let mut store = TodoStore::new();
    for i in 0..30 {
        store.add(&format!("task number {i:02}"), Priority::Medium);
    }
    let mut app = App::with_store(store);
    app.handle_key_event(key(KeyCode::Tab));
    for _ in 0..29 {
        app.handle_key_event(key(KeyCode::Char('j')));
    }
    let selected = app.selected_id().and_then(|id| app.store.get(id)).unwrap();
    assert_eq!(selected.text, "task number 00");

    let screen = render(&app);
    assert!(screen_contains(&screen, "task number 00"));
    assert!(!screen_contains(&screen, "task number 29"));

    app.handle_key_event(key(KeyCode::Char('e')));
    assert!(screen_contains(&render(&app), "[✎] task number 00█"));
}

#[test]
fn editor_row_is_scrolled_into_view() {
    let mut store = TodoStore::new();
    for i in 0..30 {
        store.add(&format!("task number {i:02}"), Priority::Medium);
    }
    let mut app = App::with_store(store);
    let last = app.store.tasks()[29].id;
    app.begin_edit(last);
    assert!(screen_contains(&render(&app), "[✎] task number 00█"));
}

#[test]
fn filter_hides_non_matching_tasks() {
    let mut app = App::with_store(TodoStore::with_demo_tasks());
    app.set_filter(Filter::Completed);
    let screen = render(&app);
    assert!(screen_contains(&screen, "Schedule team meeting"));
    assert!(!screen_contains(&screen, "Finalize project proposal"));
    // The counter ignores the filter.
    assert!(screen_contains(&screen, "2 tasks left"));
}

// ===========================================================================
// Empty states
// ===========================================================================

#[test]
fn empty_completed_view_message() {
    let mut store = TodoStore::new();
    store.add("not done", Priority::Medium);
    let mut app = App::with_store(store);
    app.set_filter(Filter::Completed);
    assert!(screen_contains(&render(&app), "No completed tasks yet!"));
}

#[test]
fn empty_list_message() {
    let app = App::new();
    let screen = render(&app);
    assert!(screen_contains(&screen, "You're all caught up!"));
    assert!(screen_contains(&screen, "0 tasks left"));
}

// ===========================================================================
// Input and editing
// ===========================================================================

#[test]
fn placeholder_shows_when_input_unfocused() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Tab));
    assert!(screen_contains(&render(&app), "Add a new task..."));
}

#[test]
fn typed_task_appears_after_enter() {
    let mut app = App::new();
    for c in "Water plants".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    assert!(screen_contains(&render(&app), "Water plants█"));

    app.handle_key_event(key(KeyCode::Enter));
    let screen = render(&app);
    assert!(screen_contains(&screen, "[ ] Water plants"));
    assert!(screen_contains(&screen, "1 task left"));
}

#[test]
fn edited_row_shows_buffer() {
    let mut app = App::with_store(TodoStore::with_demo_tasks());
    let id = app.store.tasks()[2].id;
    app.begin_edit(id);
    app.handle_key_event(key(KeyCode::Char('!')));
    let screen = render(&app);
    assert!(screen_contains(&screen, "[✎] Update weekly report!█"));
    assert!(screen_contains(&screen, "Esc: cancel"));
}
