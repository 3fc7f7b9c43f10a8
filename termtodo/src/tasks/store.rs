//! Todo store: task CRUD, completion toggling, edit sessions and filtering.

use termtodo_model::{Filter, Priority, Task, TaskId};

/// The task currently being edited and its seeded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Task under edit. Always refers to a task in the store.
    pub id: TaskId,
    /// Text the buffer was seeded with.
    pub text: String,
    /// Priority the buffer was seeded with.
    pub priority: Priority,
}

/// Holds the task list, filter and edit state.
///
/// Tasks are kept newest-first. Ids come from a private counter and are
/// never reused, so they stay unique across removals.
#[derive(Debug, Clone)]
pub struct TodoStore {
    tasks: Vec<Task>,
    filter: Filter,
    editing: Option<EditSession>,
    next_id: u64,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::All,
            editing: None,
            next_id: 1,
        }
    }

    /// Creates a store holding the three sample tasks shown on first launch.
    #[must_use]
    pub fn with_demo_tasks() -> Self {
        let mut store = Self::new();
        // Added oldest-first so they end up in display order.
        store.add("Update weekly report", Priority::Low);
        if let Some(id) = store.add("Schedule team meeting", Priority::Medium) {
            store.toggle_complete(id);
        }
        store.add("Finalize project proposal", Priority::High);
        store
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Adds a new open task at the front of the list.
    ///
    /// Returns the new id, or `None` if `text` is blank (nothing changes).
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring blank task");
            return None;
        }

        let id = self.allocate_id();
        self.tasks.insert(0, Task::new(id, text.to_string(), priority));
        tracing::debug!(%id, %priority, "task added");
        Some(id)
    }

    /// Removes the task with `id`. Returns `false` if there was none.
    ///
    /// Removing the task under edit also closes the edit session.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tasks.remove(idx);
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        tracing::debug!(%id, "task removed");
        true
    }

    /// Flips the completion flag of `id`. Returns `false` if there was none.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        tracing::debug!(%id, completed = task.completed, "task toggled");
        true
    }

    /// Opens an edit session on `id`, seeded from the task's current values.
    ///
    /// An open session on another task is dropped without saving. Unknown
    /// ids leave the current session untouched. Returns the new session.
    pub fn begin_edit(&mut self, id: TaskId) -> Option<&EditSession> {
        let task = self.get(id)?;
        let session = EditSession {
            id,
            text: task.text.clone(),
            priority: task.priority,
        };
        if let Some(previous) = self.editing.replace(session)
            && previous.id != id
        {
            tracing::debug!(abandoned = %previous.id, "unsaved edit abandoned");
        }
        tracing::debug!(%id, "edit started");
        self.editing.as_ref()
    }

    /// Closes the edit session, discarding its buffer.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            tracing::debug!(id = %session.id, "edit cancelled");
        }
    }

    /// Saves `text` and `priority` into the task under edit and closes the
    /// session.
    ///
    /// Blank text is rejected and the session stays open. Returns whether
    /// the task was updated.
    pub fn commit_edit(&mut self, text: &str, priority: Priority) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(session) = self.editing.take() else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == session.id) else {
            return false;
        };
        task.text = text.to_string();
        task.priority = priority;
        tracing::debug!(id = %session.id, %priority, "edit committed");
        true
    }

    /// Sets the view filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks passing the current filter, in list order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    /// The current view filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// The open edit session, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Id of the task under edit, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|s| s.id)
    }

    /// All tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Total number of tasks, regardless of filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
