//! Durable task journal.
//!
//! # Responsibility
//! - Record every task-creation attempt to an append-only sink.
//! - Keep the record format human-diffable; nothing in core reads it back.
//!
//! # Invariants
//! - Journal writes are independent of in-memory registry state.
//! - File handles are scoped to a single append.

pub mod task_journal;
