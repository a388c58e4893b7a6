//! Project domain model and progress reporting.
//!
//! # Invariants
//! - A project is the sole owner of its tasks' lifetime.
//! - Tasks keep insertion order; no dedup is applied.
//! - Progress over an empty task list is reported as "no tasks", never
//!   computed by dividing by zero.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named container of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    tasks: Vec<Task>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Renders every task in insertion order.
    pub fn show_tasks(&self) -> Vec<String> {
        self.tasks.iter().map(ToString::to_string).collect()
    }

    /// Counts completed tasks against the total.
    pub fn show_progress(&self) -> ProjectProgress {
        ProjectProgress {
            completed: self.tasks.iter().filter(|task| task.completed).count(),
            total: self.tasks.len(),
        }
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Completion snapshot for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    pub completed: usize,
    pub total: usize,
}

impl ProjectProgress {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Completed share in percent, or `None` when the project has no tasks.
    pub fn percent(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.completed as f64 / self.total as f64 * 100.0)
    }
}

impl Display for ProjectProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.percent() {
            Some(percent) => write!(f, "Project Progress: {percent:?}%"),
            None => f.write_str("Project Progress: no tasks yet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectProgress};
    use crate::model::task::Task;

    #[test]
    fn progress_on_empty_project_reports_no_tasks() {
        let project = Project::new("empty", "");
        let progress = project.show_progress();

        assert!(progress.is_empty());
        assert_eq!(progress.percent(), None);
        assert_eq!(progress.to_string(), "Project Progress: no tasks yet");
    }

    #[test]
    fn progress_counts_completed_tasks() {
        let mut project = Project::new("p", "");
        let mut done = Task::todo("done", "", "high");
        done.mark_as_completed();
        project.add_task(done);
        project.add_task(Task::checklist("open", "", "1"));

        let progress = project.show_progress();
        assert_eq!(
            progress,
            ProjectProgress {
                completed: 1,
                total: 2
            }
        );
        assert_eq!(progress.percent(), Some(50.0));
        assert_eq!(progress.to_string(), "Project Progress: 50.0%");
    }

    #[test]
    fn show_tasks_keeps_insertion_order_without_dedup() {
        let mut project = Project::new("p", "");
        let task = Task::todo("same", "", "1");
        project.add_task(task.clone());
        project.add_task(task);

        assert_eq!(
            project.show_tasks(),
            vec!["same (Pending)".to_string(), "same (Pending)".to_string()]
        );
    }
}
