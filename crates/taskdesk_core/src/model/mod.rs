//! Domain model for users, projects and their tasks.
//!
//! # Responsibility
//! - Define the data structures the registry maintains.
//! - Keep task ownership explicit: projects own tasks, users reference them.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Tasks are never deleted once added to a project.

pub mod project;
pub mod task;
pub mod user;
