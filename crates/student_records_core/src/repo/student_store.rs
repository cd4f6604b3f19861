//! Connection-per-call record store.
//!
//! # Responsibility
//! - Serve `StudentRepository` calls against the configured database file.
//! - Scope each connection to exactly one operation.
//!
//! # Invariants
//! - Every call opens a fresh connection and drops it before returning, on
//!   success and failure alike.
//! - Open/bootstrap failures surface as `RepoError::Connectivity`.

use crate::config::StoreConfig;
use crate::db::open_db;
use crate::model::student::StudentRecord;
use crate::model::subject::Subject;
use crate::repo::student_repo::{
    RepoResult, SemesterMark, SqliteStudentRepository, StudentRepository,
};
use rusqlite::Connection;
use std::path::Path;

/// Record store bound to a database file rather than a live connection.
#[derive(Debug, Clone)]
pub struct StudentStore {
    config: StoreConfig,
}

impl StudentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn db_path(&self) -> &Path {
        &self.config.db_path
    }

    fn with_repo<T>(
        &self,
        op: impl FnOnce(&SqliteStudentRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn: Connection = open_db(&self.config.db_path)?;
        let repo = SqliteStudentRepository::try_new(&conn)?;
        op(&repo)
    }
}

impl StudentRepository for StudentStore {
    fn load_all(&self) -> RepoResult<Vec<StudentRecord>> {
        self.with_repo(|repo| repo.load_all())
    }

    fn insert(&self, record: &StudentRecord) -> RepoResult<()> {
        self.with_repo(|repo| repo.insert(record))
    }

    fn delete(&self, name: &str, email: &str) -> RepoResult<usize> {
        self.with_repo(|repo| repo.delete(name, email))
    }

    fn query_semester_series(&self, name: &str, subject: Subject) -> RepoResult<Vec<SemesterMark>> {
        self.with_repo(|repo| repo.query_semester_series(name, subject))
    }
}
