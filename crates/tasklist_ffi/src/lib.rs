//! Flutter-facing FFI surface for the task list core.

pub mod api;
