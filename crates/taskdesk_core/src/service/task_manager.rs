//! Task registry use-case service.
//!
//! # Responsibility
//! - Own every user and project for the lifetime of one run.
//! - Construct task variants and wire assignment (user -> task) and
//!   containment (project -> task).
//! - Forward raw task-creation attempts to the durable journal.
//!
//! # Invariants
//! - Usernames are unique; uniqueness is checked at registration.
//! - The default project exists from construction onward.
//! - A task reachable from a user is always owned by a project.
//! - A task whose user lookup failed is still owned by the default
//!   project but is reachable from no user.
//! - The journal record is written before the task type is validated, so
//!   rejected attempts are journaled too.

use crate::error::{TaskManagerError, TaskManagerResult};
use crate::journal::task_journal::{
    format_assigned_date, local_today, TaskJournal, TaskRecord,
};
use crate::model::project::{Project, ProjectProgress};
use crate::model::task::{Task, TaskId, TaskKind};
use crate::model::user::User;
use chrono::NaiveDate;
use log::{info, warn};

/// Title of the project every new task lands in.
pub const DEFAULT_PROJECT_TITLE: &str = "Default Project";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "A default project";

/// Raw input for one task-creation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub username: String,
    pub title: String,
    pub description: String,
    /// `checklist` or `to-do`, case-insensitive.
    pub task_type: String,
    /// Free-form due date, journaled verbatim.
    pub due_date: String,
    /// Rank for checklists, priority for to-dos.
    pub rank_or_priority: String,
}

/// Outcome of a successful task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    pub task_id: TaskId,
    /// Project that owns the new task.
    pub project: String,
    /// `None` when the requested user was not found and the task is orphaned.
    pub assignee: Option<String>,
}

/// Rendered task list for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTasks {
    pub title: String,
    pub tasks: Vec<String>,
}

/// Registry of users and projects driven by an interactive front end.
pub struct TaskManager<J: TaskJournal> {
    users: Vec<User>,
    projects: Vec<Project>,
    journal: J,
    today: fn() -> NaiveDate,
}

impl<J: TaskJournal> TaskManager<J> {
    /// Creates an empty registry holding only the default project.
    pub fn new(journal: J) -> Self {
        info!(
            "event=registry_init module=registry status=ok project={}",
            DEFAULT_PROJECT_TITLE
        );
        Self {
            users: Vec::new(),
            projects: vec![Project::new(
                DEFAULT_PROJECT_TITLE,
                DEFAULT_PROJECT_DESCRIPTION,
            )],
            journal,
            today: local_today,
        }
    }

    /// Replaces the clock used for `Date Assigned` journal values.
    pub fn with_date_source(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Registers a new user with an empty task list.
    ///
    /// The password pair is only compared; it is never stored.
    ///
    /// # Errors
    /// - `DuplicateUsername` when `username` is taken (checked first).
    /// - `PasswordMismatch` when `password != confirm`.
    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> TaskManagerResult<&User> {
        if self.get_user_by_username(username).is_some() {
            return Err(log_failure(
                "user_register",
                TaskManagerError::DuplicateUsername(username.to_string()),
            ));
        }
        if password != confirm {
            return Err(log_failure(
                "user_register",
                TaskManagerError::PasswordMismatch,
            ));
        }

        let index = self.users.len();
        self.users.push(User::new(username));
        info!(
            "event=user_register module=registry status=ok user={} user_count={}",
            username,
            self.users.len()
        );
        Ok(&self.users[index])
    }

    /// Journals the request, then creates and assigns the task.
    ///
    /// # Contract
    /// - The journal record is appended before anything is validated.
    /// - An unknown task type creates no task.
    /// - An unknown user still creates the task in the default project,
    ///   reported through `CreatedTask::assignee == None`.
    ///
    /// # Errors
    /// - `Journal` when the record cannot be appended (nothing created).
    /// - `InvalidTaskType` for types other than `checklist` / `to-do`.
    /// - `ProjectNotFound` when the default project is missing.
    pub fn create_and_assign_task(
        &mut self,
        request: &NewTaskRequest,
    ) -> TaskManagerResult<CreatedTask> {
        self.journal_task_attempt(request)?;
        self.create_journaled_task(request)
    }

    /// Appends the raw task-creation attempt to the journal.
    ///
    /// `task_type` and `rank_or_priority` are not part of the record, so an
    /// interactive caller can journal before asking for the rank/priority.
    pub fn journal_task_attempt(&self, request: &NewTaskRequest) -> TaskManagerResult<()> {
        let record = TaskRecord {
            username: request.username.clone(),
            task_title: request.title.clone(),
            description: request.description.clone(),
            date_assigned: format_assigned_date((self.today)()),
            due_date: request.due_date.clone(),
            complete: false,
        };
        self.journal
            .append(&record)
            .map_err(|err| log_failure("task_journal", err.into()))
    }

    /// Creates and assigns a task whose attempt was already journaled.
    ///
    /// Does not touch the journal; see `create_and_assign_task` for the
    /// remaining contract.
    pub fn create_journaled_task(
        &mut self,
        request: &NewTaskRequest,
    ) -> TaskManagerResult<CreatedTask> {
        let kind = TaskKind::parse(&request.task_type, request.rank_or_priority.as_str())
            .map_err(|err| log_failure("task_create", err.into()))?;

        let project_index = self
            .projects
            .iter()
            .position(|project| project.title == DEFAULT_PROJECT_TITLE)
            .ok_or_else(|| {
                log_failure(
                    "task_create",
                    TaskManagerError::ProjectNotFound(DEFAULT_PROJECT_TITLE.to_string()),
                )
            })?;

        let mut task = Task::new(request.title.as_str(), request.description.as_str(), kind);
        let assignee = match self
            .users
            .iter_mut()
            .find(|user| user.name == request.username)
        {
            Some(user) => {
                user.assign_task(&mut task);
                Some(user.name.clone())
            }
            None => {
                warn!(
                    "event=task_create module=registry status=orphaned error_code=user_not_found task_id={}",
                    task.id
                );
                None
            }
        };

        let task_id = task.id;
        let project = &mut self.projects[project_index];
        project.add_task(task);
        info!(
            "event=task_create module=registry status=ok task_id={} project={} assigned={}",
            task_id,
            project.title,
            assignee.is_some()
        );

        Ok(CreatedTask {
            task_id,
            project: project.title.clone(),
            assignee,
        })
    }

    /// Lists every project's tasks in insertion order.
    pub fn view_all(&self) -> Vec<ProjectTasks> {
        info!(
            "event=task_list module=registry status=ok scope=all project_count={}",
            self.projects.len()
        );
        self.projects
            .iter()
            .map(|project| ProjectTasks {
                title: project.title.clone(),
                tasks: project.show_tasks(),
            })
            .collect()
    }

    /// Lists the tasks assigned to `username` in assignment order.
    pub fn view_mine(&self, username: &str) -> TaskManagerResult<Vec<String>> {
        let user = self.require_user("task_list", username)?;
        let tasks = user.show_assigned_tasks(&self.projects);
        info!(
            "event=task_list module=registry status=ok scope=user user={} task_count={}",
            username,
            tasks.len()
        );
        Ok(tasks)
    }

    /// Marks the first task assigned to `username` titled `task_title`.
    ///
    /// Duplicate titles resolve to the earliest assignment.
    pub fn mark_task_complete(
        &mut self,
        username: &str,
        task_title: &str,
    ) -> TaskManagerResult<&Task> {
        let user = self.require_user("task_complete", username)?;
        let found = user
            .tasks_assigned()
            .iter()
            .copied()
            .find(|id| self.task(*id).is_some_and(|task| task.title == task_title));

        let not_found = || {
            log_failure(
                "task_complete",
                TaskManagerError::TaskNotFound {
                    username: username.to_string(),
                    title: task_title.to_string(),
                },
            )
        };
        let task_id = found.ok_or_else(not_found)?;
        let task = self
            .projects
            .iter_mut()
            .find_map(|project| project.task_mut(task_id))
            .ok_or_else(not_found)?;

        task.mark_as_completed();
        info!(
            "event=task_complete module=registry status=ok task_id={} user={}",
            task_id, username
        );
        Ok(&*task)
    }

    /// Completion snapshot for the project titled `title`.
    pub fn project_progress(&self, title: &str) -> TaskManagerResult<ProjectProgress> {
        self.get_project_by_title(title)
            .map(Project::show_progress)
            .ok_or_else(|| {
                log_failure(
                    "project_progress",
                    TaskManagerError::ProjectNotFound(title.to_string()),
                )
            })
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == username)
    }

    pub fn get_project_by_title(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.title == title)
    }

    /// Finds a task by ID across all projects.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.projects.iter().find_map(|project| project.task(id))
    }

    fn require_user(&self, event: &str, username: &str) -> TaskManagerResult<&User> {
        self.get_user_by_username(username).ok_or_else(|| {
            log_failure(
                event,
                TaskManagerError::UserNotFound(username.to_string()),
            )
        })
    }
}

fn log_failure(event: &str, err: TaskManagerError) -> TaskManagerError {
    warn!(
        "event={} module=registry status=error error_code={} error={}",
        event,
        err.code(),
        err
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{TaskManager, DEFAULT_PROJECT_TITLE};
    use crate::error::TaskManagerError;
    use crate::journal::task_journal::MemoryTaskJournal;

    #[test]
    fn new_registry_holds_only_default_project() {
        let manager = TaskManager::new(MemoryTaskJournal::new());

        assert!(manager.users().is_empty());
        assert_eq!(manager.projects().len(), 1);
        assert_eq!(manager.projects()[0].title, DEFAULT_PROJECT_TITLE);
        assert!(manager
            .project_progress(DEFAULT_PROJECT_TITLE)
            .expect("default project exists")
            .is_empty());
    }

    #[test]
    fn duplicate_check_runs_before_password_check() {
        let mut manager = TaskManager::new(MemoryTaskJournal::new());
        manager
            .register_user("alice", "pw", "pw")
            .expect("first registration");

        let err = manager
            .register_user("alice", "a", "b")
            .expect_err("duplicate must fail");
        assert!(matches!(err, TaskManagerError::DuplicateUsername(name) if name == "alice"));
    }

    #[test]
    fn unknown_project_progress_is_reported() {
        let manager = TaskManager::new(MemoryTaskJournal::new());
        let err = manager
            .project_progress("Side Project")
            .expect_err("missing project must fail");
        assert_eq!(err.code(), "project_not_found");
    }

    #[test]
    fn mark_complete_on_user_without_tasks_reports_task_not_found() {
        let mut manager = TaskManager::new(MemoryTaskJournal::new());
        manager.register_user("bob", "pw", "pw").expect("register");

        let err = manager
            .mark_task_complete("bob", "anything")
            .expect_err("no tasks assigned");
        assert!(matches!(err, TaskManagerError::TaskNotFound { .. }));
    }
}
