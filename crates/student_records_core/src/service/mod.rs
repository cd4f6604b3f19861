//! Core use-case services.
//!
//! # Responsibility
//! - Derive chart data from records and store queries.
//! - Own the in-memory record collection and keep it consistent with the store.

pub mod aggregation;
pub mod session;
