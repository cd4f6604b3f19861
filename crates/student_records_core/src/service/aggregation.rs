//! Chart aggregations over student records.
//!
//! # Responsibility
//! - Sum total marks per student name for the totals bar chart.
//! - Build graded per-semester series for one student and subject.
//!
//! # Invariants
//! - Functions hold no state between calls.
//! - Duplicate names merge into one total, which can differ from the per-row
//!   totals shown in the record table.
//! - Graded series preserve store row order.

use crate::model::grade::Grade;
use crate::model::student::StudentRecord;
use crate::model::subject::Subject;
use crate::repo::student_repo::{RepoResult, SemesterMark, StudentRepository};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// One graded point of a student's semester series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedSemesterMark {
    pub semester: String,
    pub marks: i32,
    pub grade: Grade,
}

impl GradedSemesterMark {
    /// Semester as a number for chart axes; `None` for non-numeric terms.
    pub fn semester_number(&self) -> Option<i64> {
        self.semester.trim().parse().ok()
    }
}

impl From<SemesterMark> for GradedSemesterMark {
    fn from(value: SemesterMark) -> Self {
        Self {
            grade: Grade::from_marks(value.marks),
            semester: value.semester,
            marks: value.marks,
        }
    }
}

impl Display for GradedSemesterMark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Semester {} Grade: {}", self.semester, self.grade)
    }
}

/// Sums total marks by student name.
pub fn totals_by_name(records: &[StudentRecord]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.name().to_string()).or_insert(0) += record.total_marks();
    }
    totals
}

/// Returns the distinct student names present in `records`.
pub fn unique_names(records: &[StudentRecord]) -> BTreeSet<String> {
    records
        .iter()
        .map(|record| record.name().to_string())
        .collect()
}

/// Loads one student's semester series for `subject` and grades each point.
///
/// `subject` must be exactly `Mathematics`, `Physics` or `Chemistry`;
/// anything else fails with `RepoError::UnknownSubject` before the store is
/// queried.
pub fn semester_series_with_grades<R: StudentRepository + ?Sized>(
    repo: &R,
    name: &str,
    subject: &str,
) -> RepoResult<Vec<GradedSemesterMark>> {
    let subject = Subject::parse(subject)?;
    let series = repo.query_semester_series(name, subject)?;
    Ok(series.into_iter().map(GradedSemesterMark::from).collect())
}
