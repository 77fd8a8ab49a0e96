//! Domain model for the in-memory task list.
//!
//! # Responsibility
//! - Define the task entity shape the store owns and mutates.
//! - Keep text validation at the type level so blank tasks are unrepresentable.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused.
//! - Task text is trimmed and non-empty once it is a `TaskText`.

pub mod task;
