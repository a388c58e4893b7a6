//! Registry error taxonomy.
//!
//! Every variant is recoverable: callers report it and carry on.

use crate::journal::task_journal::JournalError;
use crate::model::task::InvalidTaskType;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskManagerResult<T> = Result<T, TaskManagerError>;

/// Error returned by `TaskManager` operations.
#[derive(Debug)]
pub enum TaskManagerError {
    /// Username is already registered.
    DuplicateUsername(String),
    /// Password and confirmation differ.
    PasswordMismatch,
    UserNotFound(String),
    ProjectNotFound(String),
    /// Task type is neither `checklist` nor `to-do`.
    InvalidTaskType(String),
    /// User has no assigned task with this title.
    TaskNotFound { username: String, title: String },
    /// Durable journal append failed.
    Journal(JournalError),
}

impl TaskManagerError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername(_) => "duplicate_username",
            Self::PasswordMismatch => "password_mismatch",
            Self::UserNotFound(_) => "user_not_found",
            Self::ProjectNotFound(_) => "project_not_found",
            Self::InvalidTaskType(_) => "invalid_task_type",
            Self::TaskNotFound { .. } => "task_not_found",
            Self::Journal(_) => "journal_failed",
        }
    }
}

impl Display for TaskManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateUsername(name) => write!(f, "username `{name}` already exists"),
            Self::PasswordMismatch => write!(f, "the passwords do not match"),
            Self::UserNotFound(name) => write!(f, "user `{name}` not found"),
            Self::ProjectNotFound(title) => write!(f, "project `{title}` not found"),
            Self::InvalidTaskType(value) => write!(f, "invalid task type `{value}`"),
            Self::TaskNotFound { username, title } => {
                write!(f, "task `{title}` not found for user `{username}`")
            }
            Self::Journal(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Journal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<JournalError> for TaskManagerError {
    fn from(value: JournalError) -> Self {
        Self::Journal(value)
    }
}

impl From<InvalidTaskType> for TaskManagerError {
    fn from(value: InvalidTaskType) -> Self {
        Self::InvalidTaskType(value.0)
    }
}
