use thiserror::Error;

use super::ids::TaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("invalid due date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDueDate(String),

    #[error("store error: {0}")]
    Store(String),
}
