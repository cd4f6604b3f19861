//! Domain model for student academic records.
//!
//! # Responsibility
//! - Define the canonical student record shape used by core logic.
//! - Own the closed subject set and the letter-grade classification.
//!
//! # Invariants
//! - A record's total marks equal the sum of its three subject marks.
//! - Subject names map to fixed store columns; caller text never becomes SQL.

pub mod grade;
pub mod student;
pub mod subject;
