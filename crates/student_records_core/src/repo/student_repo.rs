//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate between `StudentRecord` values and rows of `students`.
//! - Provide load/insert/delete and the per-subject semester series query.
//!
//! # Invariants
//! - Row order is rowid order for every read path.
//! - `delete` matches on exact `(name, email)` and removes every matching
//!   row; two students sharing both values are deleted together.
//! - Read paths reject cell types they cannot represent instead of masking them.

use crate::db::DbError;
use crate::model::student::{StudentDraft, StudentRecord};
use crate::model::subject::{Subject, UnknownSubjectError};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT
    name,
    gender,
    email,
    contact_number,
    address,
    mathematics_marks,
    physics_marks,
    chemistry_marks,
    admission_number,
    semester
FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Store could not be opened or bootstrapped.
    Connectivity(DbError),
    /// Statement failed: malformed SQL, constraint violation, I/O during query.
    Query(rusqlite::Error),
    /// Subject text outside the recognized set; no query was issued.
    UnknownSubject(String),
    /// Connection is open but lacks the `students` table.
    MissingRequiredTable(&'static str),
    /// A stored cell cannot be represented by the record model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connectivity(err) => write!(f, "store unavailable: {err}"),
            Self::Query(err) => write!(f, "store query failed: {err}"),
            Self::UnknownSubject(value) => write!(
                f,
                "unknown subject `{value}`; expected Mathematics|Physics|Chemistry"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted student data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connectivity(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::UnknownSubject(_) | Self::MissingRequiredTable(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Connectivity(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

impl From<UnknownSubjectError> for RepoError {
    fn from(value: UnknownSubjectError) -> Self {
        Self::UnknownSubject(value.0)
    }
}

/// One `(semester, marks)` point of a student's subject history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterMark {
    pub semester: String,
    pub marks: i32,
}

/// Repository interface for the student record store.
pub trait StudentRepository {
    /// Loads every row in store order.
    fn load_all(&self) -> RepoResult<Vec<StudentRecord>>;
    /// Persists one record. No identifier is generated or returned.
    fn insert(&self, record: &StudentRecord) -> RepoResult<()>;
    /// Removes all rows matching `name` and `email`; returns rows removed.
    fn delete(&self, name: &str, email: &str) -> RepoResult<usize>;
    /// Lists `(semester, marks)` for one student and subject in store order.
    fn query_semester_series(&self, name: &str, subject: Subject) -> RepoResult<Vec<SemesterMark>>;
}

impl<R: StudentRepository + ?Sized> StudentRepository for &R {
    fn load_all(&self) -> RepoResult<Vec<StudentRecord>> {
        (**self).load_all()
    }

    fn insert(&self, record: &StudentRecord) -> RepoResult<()> {
        (**self).insert(record)
    }

    fn delete(&self, name: &str, email: &str) -> RepoResult<usize> {
        (**self).delete(name, email)
    }

    fn query_semester_series(&self, name: &str, subject: Subject) -> RepoResult<Vec<SemesterMark>> {
        (**self).query_semester_series(name, subject)
    }
}

/// SQLite-backed student repository over a borrowed connection.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// Rejects connections that do not expose the `students` table.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'students'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Err(RepoError::MissingRequiredTable("students"));
        }
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_student_row(row)?);
        }

        Ok(records)
    }

    fn insert(&self, record: &StudentRecord) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO students (
                name,
                gender,
                email,
                contact_number,
                address,
                mathematics_marks,
                physics_marks,
                chemistry_marks,
                admission_number,
                semester
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                record.name(),
                record.gender(),
                record.email(),
                record.contact_number(),
                record.address(),
                record.mathematics_marks(),
                record.physics_marks(),
                record.chemistry_marks(),
                record.admission_number(),
                record.semester(),
            ],
        )?;

        Ok(())
    }

    fn delete(&self, name: &str, email: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "DELETE FROM students WHERE name = ?1 AND email = ?2;",
            params![name, email],
        )?;
        Ok(changed)
    }

    fn query_semester_series(&self, name: &str, subject: Subject) -> RepoResult<Vec<SemesterMark>> {
        let sql = format!(
            "SELECT semester, {column} AS marks
             FROM students
             WHERE name = ?1
             ORDER BY rowid ASC;",
            column = subject.column()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([name])?;
        let mut series = Vec::new();

        while let Some(row) = rows.next()? {
            series.push(SemesterMark {
                semester: read_semester(row)?,
                marks: row.get("marks")?,
            });
        }

        Ok(series)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<StudentRecord> {
    let draft = StudentDraft {
        name: row.get("name")?,
        gender: row.get("gender")?,
        email: row.get("email")?,
        contact_number: row.get("contact_number")?,
        address: row.get("address")?,
        mathematics_marks: row.get("mathematics_marks")?,
        physics_marks: row.get("physics_marks")?,
        chemistry_marks: row.get("chemistry_marks")?,
        admission_number: row.get("admission_number")?,
        semester: read_semester(row)?,
    };
    Ok(StudentRecord::new(draft))
}

/// Semester cells may hold text or integers depending on who wrote them.
fn read_semester(row: &Row<'_>) -> RepoResult<String> {
    match row.get_ref("semester")? {
        ValueRef::Text(_) => Ok(row.get("semester")?),
        ValueRef::Integer(value) => Ok(value.to_string()),
        ValueRef::Null => Err(RepoError::InvalidData(
            "null value in students.semester".to_string(),
        )),
        ValueRef::Real(value) => Err(RepoError::InvalidData(format!(
            "non-integer value `{value}` in students.semester"
        ))),
        ValueRef::Blob(_) => Err(RepoError::InvalidData(
            "blob value in students.semester".to_string(),
        )),
    }
}
