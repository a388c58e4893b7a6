//! Task domain model.
//!
//! # Responsibility
//! - Define the unit of work tracked by the registry.
//! - Model task variants as a closed set (`Checklist`, `To-do`).
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed` only moves from `false` to `true`.
//! - `assignee` is a non-owning reference by user name; it is set only
//!   through `User::assign_task`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task owned by a project.
pub type TaskId = Uuid;

/// Type string accepted for checklist tasks.
pub const TASK_TYPE_CHECKLIST: &str = "checklist";
/// Type string accepted for to-do tasks.
pub const TASK_TYPE_TODO: &str = "to-do";

/// Variant-specific task detail.
///
/// `rank` and `priority` are free-form scalars; no range or format is
/// enforced on either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Checklist { rank: String },
    Todo { priority: String },
}

impl TaskKind {
    /// Resolves a task kind from user-supplied type text.
    ///
    /// Matching is case-insensitive; surrounding whitespace is significant.
    /// `value` becomes the rank (checklist) or priority (to-do).
    pub fn parse(task_type: &str, value: impl Into<String>) -> Result<Self, InvalidTaskType> {
        let normalized = task_type.to_lowercase();
        match normalized.as_str() {
            TASK_TYPE_CHECKLIST => Ok(Self::Checklist { rank: value.into() }),
            TASK_TYPE_TODO => Ok(Self::Todo {
                priority: value.into(),
            }),
            _ => Err(InvalidTaskType(task_type.to_string())),
        }
    }
}

/// Rejected task type text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTaskType(pub String);

impl Display for InvalidTaskType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid task type `{}`; expected {TASK_TYPE_CHECKLIST}|{TASK_TYPE_TODO}",
            self.0
        )
    }
}

impl Error for InvalidTaskType {}

/// A unit of work with completion state and an optional assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Identifies the task within a user's assigned list (not unique).
    pub title: String,
    pub description: String,
    pub kind: TaskKind,
    pub completed: bool,
    /// Name of the assigned user, if any.
    pub assignee: Option<String>,
}

impl Task {
    /// Creates a pending, unassigned task with a generated stable ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            kind,
            completed: false,
            assignee: None,
        }
    }

    /// Creates a checklist task ranked by `rank`.
    pub fn checklist(
        title: impl Into<String>,
        description: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        Self::new(title, description, TaskKind::Checklist { rank: rank.into() })
    }

    /// Creates a to-do task with `priority`.
    pub fn todo(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self::new(
            title,
            description,
            TaskKind::Todo {
                priority: priority.into(),
            },
        )
    }

    /// Marks this task as completed. Calling it again has no effect.
    pub fn mark_as_completed(&mut self) {
        self.completed = true;
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Human-readable detail line combining base fields and variant detail.
    pub fn get_details(&self) -> String {
        let detail = match &self.kind {
            TaskKind::Checklist { rank } => format!("[Rank: {rank}]"),
            TaskKind::Todo { priority } => format!("[Priority: {priority}]"),
        };
        format!(
            "{}: {} ({}) {detail}",
            self.title,
            self.description,
            self.status_label()
        )
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.status_label())
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidTaskType, Task, TaskKind};

    #[test]
    fn parse_matches_type_case_insensitively() {
        assert_eq!(
            TaskKind::parse("CheckList", "2").expect("checklist should parse"),
            TaskKind::Checklist {
                rank: "2".to_string()
            }
        );
        assert_eq!(
            TaskKind::parse("TO-DO", "high").expect("to-do should parse"),
            TaskKind::Todo {
                priority: "high".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = TaskKind::parse("spreadsheet", "1").expect_err("unknown type must fail");
        assert_eq!(err, InvalidTaskType("spreadsheet".to_string()));
        assert!(err.to_string().contains("spreadsheet"));
    }

    #[test]
    fn parse_rejects_padded_type() {
        let err = TaskKind::parse(" checklist ", "1").expect_err("padding is not stripped");
        assert_eq!(err, InvalidTaskType(" checklist ".to_string()));
    }

    #[test]
    fn mark_as_completed_is_idempotent() {
        let mut task = Task::todo("ship", "ship release", "high");
        assert!(!task.completed);

        task.mark_as_completed();
        task.mark_as_completed();
        assert!(task.completed);
        assert_eq!(task.to_string(), "ship (Completed)");
    }

    #[test]
    fn details_include_variant_field() {
        let checklist = Task::checklist("pack", "pack boxes", "3");
        assert_eq!(checklist.get_details(), "pack: pack boxes (Pending) [Rank: 3]");

        let todo = Task::todo("call", "call bank", "low");
        assert_eq!(todo.get_details(), "call: call bank (Pending) [Priority: low]");
        assert_eq!(todo.to_string(), "call (Pending)");
    }
}
