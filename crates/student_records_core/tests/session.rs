use rusqlite::Connection;
use std::cell::Cell;
use student_records_core::db::{open_db_in_memory, DbError};
use student_records_core::{
    RepoError, RepoResult, SemesterMark, SessionError, SqliteStudentRepository, StudentDraft,
    StudentRecord, StudentRepository, StudentSession, StudentValidationError, Subject,
};

/// Delegates to a real repository until `offline` is switched on.
struct FlakyRepo<'conn> {
    inner: SqliteStudentRepository<'conn>,
    offline: Cell<bool>,
}

impl<'conn> FlakyRepo<'conn> {
    fn new(conn: &'conn Connection) -> Self {
        Self {
            inner: SqliteStudentRepository::try_new(conn).unwrap(),
            offline: Cell::new(false),
        }
    }

    fn check(&self) -> RepoResult<()> {
        if self.offline.get() {
            return Err(RepoError::Connectivity(DbError::Open(
                rusqlite::Error::InvalidQuery,
            )));
        }
        Ok(())
    }
}

impl StudentRepository for FlakyRepo<'_> {
    fn load_all(&self) -> RepoResult<Vec<StudentRecord>> {
        self.check()?;
        self.inner.load_all()
    }

    fn insert(&self, record: &StudentRecord) -> RepoResult<()> {
        self.check()?;
        self.inner.insert(record)
    }

    fn delete(&self, name: &str, email: &str) -> RepoResult<usize> {
        self.check()?;
        self.inner.delete(name, email)
    }

    fn query_semester_series(&self, name: &str, subject: Subject) -> RepoResult<Vec<SemesterMark>> {
        self.check()?;
        self.inner.query_semester_series(name, subject)
    }
}

fn draft(name: &str, email: &str, semester: &str, math: i32) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        gender: "Rather not say".to_string(),
        email: email.to_string(),
        contact_number: "0700000000".to_string(),
        address: "1 Main Street".to_string(),
        mathematics_marks: math,
        physics_marks: 70,
        chemistry_marks: 60,
        admission_number: format!("ADM-{semester}"),
        semester: semester.to_string(),
    }
}

#[test]
fn reload_pulls_existing_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert(&StudentRecord::new(draft("Alice", "a@example.com", "1", 80)))
        .unwrap();

    let mut session = StudentSession::new(repo);
    assert!(session.records().is_empty());
    assert_eq!(session.reload().unwrap(), 1);
    assert_eq!(session.records()[0].name(), "Alice");
}

#[test]
fn add_student_persists_then_appends() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(SqliteStudentRepository::try_new(&conn).unwrap());

    let added = session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();
    assert_eq!(added.total_marks(), 210);
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.repository().load_all().unwrap(), session.records());
}

#[test]
fn add_student_rejects_invalid_draft_without_touching_store() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(SqliteStudentRepository::try_new(&conn).unwrap());

    let err = session
        .add_student(draft("Alice", "a@example.com", "1", 120))
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(StudentValidationError::MarksOutOfRange {
            subject: Subject::Mathematics,
            value: 120,
        })
    ));
    assert!(session.records().is_empty());
    assert!(session.repository().load_all().unwrap().is_empty());
}

#[test]
fn failed_insert_is_not_added_to_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(FlakyRepo::new(&conn));
    session.repository().offline.set(true);

    let err = session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap_err();
    assert!(matches!(err, SessionError::Repo(RepoError::Connectivity(_))));
    assert!(session.records().is_empty());

    session.repository().offline.set(false);
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();
    assert_eq!(session.records().len(), 1);
}

#[test]
fn failed_delete_keeps_record_in_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(FlakyRepo::new(&conn));
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();

    session.repository().offline.set(true);
    let err = session.delete_student("Alice", "a@example.com").unwrap_err();
    assert!(matches!(err, SessionError::Repo(_)));
    assert_eq!(session.records().len(), 1);

    session.repository().offline.set(false);
    assert_eq!(session.delete_student("Alice", "a@example.com").unwrap(), 1);
    assert!(session.records().is_empty());
    assert!(session.repository().load_all().unwrap().is_empty());
}

#[test]
fn failed_reload_keeps_previous_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(FlakyRepo::new(&conn));
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();

    session.repository().offline.set(true);
    assert!(session.reload().is_err());
    assert_eq!(session.records().len(), 1);
}

#[test]
fn delete_of_missing_pair_reports_zero_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(SqliteStudentRepository::try_new(&conn).unwrap());
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();

    assert_eq!(session.delete_student("Alice", "b@example.com").unwrap(), 0);
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.repository().load_all().unwrap().len(), 1);
}

#[test]
fn delete_removes_all_records_sharing_name_and_email() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(SqliteStudentRepository::try_new(&conn).unwrap());
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();
    session
        .add_student(draft("Alice", "a@example.com", "2", 40))
        .unwrap();
    session
        .add_student(draft("Bob", "b@example.com", "1", 55))
        .unwrap();

    assert_eq!(session.delete_student("Alice", "a@example.com").unwrap(), 2);
    let names: Vec<_> = session.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Bob"]);
}

#[test]
fn session_derives_chart_data() {
    let conn = open_db_in_memory().unwrap();
    let mut session = StudentSession::new(SqliteStudentRepository::try_new(&conn).unwrap());
    session
        .add_student(draft("Alice", "a@example.com", "1", 80))
        .unwrap();
    session
        .add_student(draft("Alice", "a@example.com", "2", 40))
        .unwrap();
    session
        .add_student(draft("Bob", "b@example.com", "1", 20))
        .unwrap();

    let totals = session.totals_by_name();
    assert_eq!(totals["Alice"], 210 + 170);
    assert_eq!(totals["Bob"], 150);
    assert_eq!(session.unique_names().len(), 2);

    let series = session
        .semester_series_with_grades("Alice", "Mathematics")
        .unwrap();
    let grades: Vec<_> = series.iter().map(|point| point.grade.as_str()).collect();
    assert_eq!(grades, ["A", "S"]);

    let err = session
        .semester_series_with_grades("Alice", "History")
        .unwrap_err();
    assert!(matches!(err, SessionError::Repo(RepoError::UnknownSubject(_))));
}
