//! Application state and event handling.
//!
//! [`App`] turns key presses into [`TodoStore`] operations and owns the
//! widget state the store does not care about: text inputs, the selected
//! row and which panel has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_model::{Filter, Priority, TaskId};

use crate::config::ClientConfig;
use crate::tasks::TodoStore;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box (default).
    Input,
    /// Task list.
    List,
    /// Inline editor on the selected task.
    Edit,
}

/// A single-line text input with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    /// Current contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len_chars() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    /// Move cursor left.
    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Empty the input.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Apply a text-editing key. Returns `false` if the key is not one.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.home(),
            KeyCode::End => self.end(),
            _ => return false,
        }
        true
    }
}

/// Main application state.
pub struct App {
    /// The todo list itself.
    pub store: TodoStore,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Text typed for the next task.
    pub new_task: TextInput,
    /// Priority chosen for the next task.
    pub new_priority: Priority,
    /// Priority the new-task selector returns to after each add.
    pub default_priority: Priority,
    /// Edit buffer for the task under edit.
    pub edit_input: TextInput,
    /// Edited priority for the task under edit.
    pub edit_priority: Priority,
    /// Selected row in the visible task list.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an app over an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(TodoStore::new())
    }

    /// Create an app over an existing store.
    #[must_use]
    pub fn with_store(store: TodoStore) -> Self {
        Self {
            store,
            focus: PanelFocus::Input,
            new_task: TextInput::default(),
            new_priority: Priority::default(),
            default_priority: Priority::default(),
            edit_input: TextInput::default(),
            edit_priority: Priority::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Create an app as described by the resolved configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut store = if config.demo_tasks {
            TodoStore::with_demo_tasks()
        } else {
            TodoStore::new()
        };
        store.set_filter(config.default_filter);
        Self::with_store(store).with_default_priority(config.default_priority)
    }

    /// Set the priority preselected for new tasks.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self.new_priority = priority;
        self
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) if self.focus != PanelFocus::Edit => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
            PanelFocus::Edit => self.handle_edit_key(key),
        }
    }

    /// Handle key event when the new-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_new_task(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.new_priority = self.new_priority.next(),
            KeyCode::Down => self.new_priority = self.new_priority.prev(),
            _ => {
                self.new_task.handle_key(key);
            }
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') => self.edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('f') => self.set_filter(self.store.filter().next()),
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Active),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event while editing a task inline.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Up => self.edit_priority = self.edit_priority.next(),
            KeyCode::Down => self.edit_priority = self.edit_priority.prev(),
            _ => {
                self.edit_input.handle_key(key);
            }
        }
    }

    /// Switch between the input box and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List | PanelFocus::Edit => PanelFocus::Input,
        };
    }

    /// Add the typed task. Blank input leaves everything as it was.
    ///
    /// The new task lands at the top, so the highlight follows the task
    /// that was selected before rather than staying on its old row.
    fn submit_new_task(&mut self) {
        let selected = self.selected_id();
        if self
            .store
            .add(self.new_task.text(), self.new_priority)
            .is_some()
        {
            self.new_task.clear();
            self.new_priority = self.default_priority;
            if let Some(id) = selected {
                self.select_id(id);
            }
            self.clamp_selection();
        }
    }

    /// Save the edit buffer. Stays in edit mode if the text is blank.
    fn submit_edit(&mut self) {
        if self
            .store
            .commit_edit(self.edit_input.text(), self.edit_priority)
        {
            self.edit_input.clear();
            self.focus = PanelFocus::List;
            self.clamp_selection();
        }
    }

    /// Drop the edit buffer and go back to the list.
    fn cancel_edit(&mut self) {
        self.store.cancel_edit();
        self.edit_input.clear();
        self.focus = PanelFocus::List;
    }

    /// Id of the highlighted task, if the visible list is not empty.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.store.visible_tasks().get(self.selected).map(|t| t.id)
    }

    /// Move the highlight to the visible row holding `id`, if there is one.
    fn select_id(&mut self, id: TaskId) {
        if let Some(idx) = self.store.visible_tasks().iter().position(|t| t.id == id) {
            self.selected = idx;
        }
    }

    /// Start editing the task with `id`, abandoning any unsaved edit.
    pub fn begin_edit(&mut self, id: TaskId) {
        if let Some(session) = self.store.begin_edit(id) {
            self.edit_input = TextInput::with_text(&session.text);
            self.edit_priority = session.priority;
            self.focus = PanelFocus::Edit;
            self.select_id(id);
        }
    }

    fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.begin_edit(id);
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_complete(id);
            // The row may have left the current filter.
            self.clamp_selection();
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove(id);
            self.clamp_selection();
        }
    }

    /// Change the view filter and keep the selection in range.
    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.store.visible_tasks().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next task.
    fn select_next(&mut self) {
        if self.selected + 1 < self.store.visible_tasks().len() {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
