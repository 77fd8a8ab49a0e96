//! In-memory task list store.
//!
//! # Responsibility
//! - Own the ordered task collection for the app session.
//! - Translate add/toggle/remove into state changes plus animation requests.
//!
//! # Invariants
//! - Task ids in the store are pairwise distinct.
//! - Insertion order is append order and never changes afterwards.
//! - Unknown ids are silent no-ops, never errors.

pub mod task_store;
