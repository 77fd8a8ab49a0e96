//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, input and confirmation flows into screen-level APIs.
//! - Keep UI/FFI layers decoupled from store internals.

pub mod task_service;
