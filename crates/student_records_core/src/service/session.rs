//! Student session: the owned in-memory record collection.
//!
//! # Responsibility
//! - Load records from the store and hold them for the presentation layer.
//! - Route add/delete commands through the store before touching memory.
//! - Report every failed command to the log sink and return a typed error.
//!
//! # Invariants
//! - The collection changes only after the matching store call succeeds.
//! - A failed command leaves the collection exactly as it was.
//! - Commands never panic, so a failure never ends the session.

use crate::model::student::{StudentDraft, StudentRecord, StudentValidationError};
use crate::repo::student_repo::{RepoError, StudentRepository};
use crate::service::aggregation::{self, GradedSemesterMark};
use log::{error, info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Failure of a session command.
#[derive(Debug)]
pub enum SessionError {
    /// Draft rejected before reaching the store.
    Validation(StudentValidationError),
    /// Store call failed; the collection was left unchanged.
    Repo(RepoError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<StudentValidationError> for SessionError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// In-memory view of the student table, kept in sync with a repository.
pub struct StudentSession<R: StudentRepository> {
    repo: R,
    records: Vec<StudentRecord>,
}

impl<R: StudentRepository> StudentSession<R> {
    /// Creates an empty session. Call `reload` to pull records from the store.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            records: Vec::new(),
        }
    }

    /// Records in store load order followed by records added this session.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Replaces the collection with the store's current rows.
    ///
    /// On failure the previous collection is kept, which is empty at startup.
    pub fn reload(&mut self) -> SessionResult<usize> {
        match self.repo.load_all() {
            Ok(records) => {
                self.records = records;
                info!(
                    "event=students_load module=session status=ok count={}",
                    self.records.len()
                );
                Ok(self.records.len())
            }
            Err(err) => {
                error!(
                    "event=students_load module=session status=error kept={} error={}",
                    self.records.len(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Validates and persists a new record, then appends it to the collection.
    pub fn add_student(&mut self, draft: StudentDraft) -> SessionResult<&StudentRecord> {
        if let Err(err) = draft.validate() {
            warn!(
                "event=student_insert module=session status=rejected error={}",
                err
            );
            return Err(err.into());
        }

        let record = StudentRecord::new(draft);
        if let Err(err) = self.repo.insert(&record) {
            error!(
                "event=student_insert module=session status=error error={}",
                err
            );
            return Err(err.into());
        }

        info!("event=student_insert module=session status=ok");
        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    /// Deletes every record matching `(name, email)` from store and memory.
    ///
    /// Returns the number of store rows removed; zero is not an error.
    pub fn delete_student(&mut self, name: &str, email: &str) -> SessionResult<usize> {
        let removed = match self.repo.delete(name, email) {
            Ok(removed) => removed,
            Err(err) => {
                error!(
                    "event=student_delete module=session status=error error={}",
                    err
                );
                return Err(err.into());
            }
        };

        self.records.retain(|record| !record.matches_key(name, email));
        if removed > 1 {
            warn!(
                "event=student_delete module=session status=ok removed={} note=shared_name_email",
                removed
            );
        } else {
            info!(
                "event=student_delete module=session status=ok removed={}",
                removed
            );
        }
        Ok(removed)
    }

    /// Totals bar chart data for the current collection.
    pub fn totals_by_name(&self) -> BTreeMap<String, i64> {
        aggregation::totals_by_name(&self.records)
    }

    /// Names offered by the student picker.
    pub fn unique_names(&self) -> BTreeSet<String> {
        aggregation::unique_names(&self.records)
    }

    /// Graded semester series for one student and subject, queried from the store.
    pub fn semester_series_with_grades(
        &self,
        name: &str,
        subject: &str,
    ) -> SessionResult<Vec<GradedSemesterMark>> {
        aggregation::semester_series_with_grades(&self.repo, name, subject).map_err(|err| {
            error!(
                "event=semester_series module=session status=error error={}",
                err
            );
            SessionError::from(err)
        })
    }
}
