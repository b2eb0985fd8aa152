use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("task name is empty")]
    EmptyName,

    #[error("due date is missing")]
    MissingDueDate,

    #[error("due date {0:?} is not mm/dd/yyyy")]
    InvalidDueDate(String),

    #[error("a task named {0:?} already exists")]
    DuplicateName(String),

    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
