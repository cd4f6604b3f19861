//! Core domain logic for the student records system.
//! This crate owns the record model, the SQLite record store and the chart
//! aggregations; presentation lives outside it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::grade::Grade;
pub use model::student::{
    StudentDraft, StudentRecord, StudentValidationError, GENDER_OPTIONS, MARKS_RANGE,
};
pub use model::subject::{Subject, UnknownSubjectError};
pub use repo::student_repo::{
    RepoError, RepoResult, SemesterMark, SqliteStudentRepository, StudentRepository,
};
pub use repo::student_store::StudentStore;
pub use service::aggregation::{
    semester_series_with_grades, totals_by_name, unique_names, GradedSemesterMark,
};
pub use service::session::{SessionError, SessionResult, StudentSession};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
