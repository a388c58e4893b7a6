//! Core use-case services.
//!
//! # Responsibility
//! - Expose the registry operations consumed by the interactive front end.
//! - Keep front ends decoupled from model ownership details.

pub mod task_manager;
