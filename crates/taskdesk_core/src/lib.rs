//! Core domain logic for TaskDesk.
//! This crate is the single source of truth for registry invariants.

pub mod error;
pub mod journal;
pub mod logging;
pub mod model;
pub mod service;

pub use error::{TaskManagerError, TaskManagerResult};
pub use journal::task_journal::{
    format_assigned_date, FileTaskJournal, JournalError, JournalResult, MemoryTaskJournal,
    TaskJournal, TaskRecord,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectProgress};
pub use model::task::{Task, TaskId, TaskKind};
pub use model::user::User;
pub use service::task_manager::{
    CreatedTask, NewTaskRequest, ProjectTasks, TaskManager, DEFAULT_PROJECT_TITLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
