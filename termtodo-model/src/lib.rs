//! Data model shared by the `TermTodo` store and UI.

pub mod filter;
pub mod task;

pub use filter::Filter;
pub use task::{Priority, Task, TaskId};

/// Errors from parsing model values out of strings (CLI flags, config).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Not one of `low`, `medium`, `high`.
    #[error("unknown priority '{0}' (expected low, medium or high)")]
    UnknownPriority(String),
    /// Not one of `all`, `active`, `completed`.
    #[error("unknown filter '{0}' (expected all, active or completed)")]
    UnknownFilter(String),
}
