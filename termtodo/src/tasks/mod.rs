//! In-memory todo list state.
//!
//! [`TodoStore`] owns the task list, the active view filter and the single
//! edit session. All mutation goes through its methods; rejected input
//! (blank text) and stale ids are silent no-ops rather than errors.

pub mod store;

pub use store::{EditSession, TodoStore};
