//! User domain model.

use crate::model::project::Project;
use crate::model::task::{Task, TaskId};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A registered user and the tasks assigned to them.
///
/// # Invariants
/// - `name` is unique within one registry.
/// - `tasks_assigned` holds references into project-owned tasks; a user
///   never owns task lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    tasks_assigned: Vec<TaskId>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks_assigned: Vec::new(),
        }
    }

    /// Assigned task IDs in assignment order.
    pub fn tasks_assigned(&self) -> &[TaskId] {
        &self.tasks_assigned
    }

    /// Records `task` as assigned to this user and points its assignee here.
    ///
    /// The same task may be assigned more than once; no dedup is applied.
    pub fn assign_task(&mut self, task: &mut Task) {
        self.tasks_assigned.push(task.id);
        task.assignee = Some(self.name.clone());
        info!(
            "event=task_assign module=model status=ok task_id={} user={}",
            task.id, self.name
        );
    }

    /// Renders every assigned task in assignment order.
    ///
    /// IDs that no project owns are skipped.
    pub fn show_assigned_tasks(&self, projects: &[Project]) -> Vec<String> {
        self.tasks_assigned
            .iter()
            .filter_map(|id| projects.iter().find_map(|project| project.task(*id)))
            .map(ToString::to_string)
            .collect()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
