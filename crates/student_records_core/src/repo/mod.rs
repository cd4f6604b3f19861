//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record store contract used by services.
//! - Isolate SQLite query details from session/business orchestration.
//!
//! # Invariants
//! - Repository APIs return typed errors; they never log-and-swallow.
//! - Subject columns come from `Subject::column`, never from caller text.

pub mod student_repo;
pub mod student_store;
