//! Student record domain model.
//!
//! # Responsibility
//! - Define the immutable record loaded from or written to the store.
//! - Provide the draft input shape and the user-input validation rules.
//!
//! # Invariants
//! - `total_marks` is computed once at construction and never mutated.
//! - Records are immutable; changes mean a new record built from a draft.
//! - Neither the record nor the store enforce mark ranges or admission number
//!   uniqueness; only `StudentDraft::validate` checks ranges.

use crate::model::subject::Subject;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Gender choices offered by the record entry form. Free text is also accepted.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Rather not say"];

/// Accepted range for a single subject mark on user-submitted drafts.
pub const MARKS_RANGE: RangeInclusive<i32> = 0..=100;

/// Validation errors for user-submitted student drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyName,
    EmptyEmail,
    MarksOutOfRange { subject: Subject, value: i32 },
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "student name cannot be empty"),
            Self::EmptyEmail => write!(f, "student email cannot be empty"),
            Self::MarksOutOfRange { subject, value } => write!(
                f,
                "{subject} marks ({value}) must be between {} and {}",
                MARKS_RANGE.start(),
                MARKS_RANGE.end()
            ),
        }
    }
}

impl Error for StudentValidationError {}

/// Field values for a student record before construction.
///
/// This is the shape the entry form fills in and the shape records are
/// deserialized through, so the derived total can never be supplied directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub mathematics_marks: i32,
    pub physics_marks: i32,
    pub chemistry_marks: i32,
    pub admission_number: String,
    pub semester: String,
}

impl StudentDraft {
    /// Checks user input before it is persisted.
    ///
    /// Rows already in the store are never passed through this check.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(StudentValidationError::EmptyEmail);
        }
        for subject in Subject::ALL {
            let value = self.marks(subject);
            if !MARKS_RANGE.contains(&value) {
                return Err(StudentValidationError::MarksOutOfRange { subject, value });
            }
        }
        Ok(())
    }

    fn marks(&self, subject: Subject) -> i32 {
        match subject {
            Subject::Mathematics => self.mathematics_marks,
            Subject::Physics => self.physics_marks,
            Subject::Chemistry => self.chemistry_marks,
        }
    }
}

/// Immutable student record with derived total marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StudentDraft")]
pub struct StudentRecord {
    name: String,
    gender: String,
    email: String,
    contact_number: String,
    address: String,
    mathematics_marks: i32,
    physics_marks: i32,
    chemistry_marks: i32,
    admission_number: String,
    semester: String,
    /// Widened so the sum of three `i32` marks is always exact.
    total_marks: i64,
}

impl StudentRecord {
    /// Builds a record and computes its total. Accepts any field values.
    pub fn new(draft: StudentDraft) -> Self {
        let total_marks = i64::from(draft.mathematics_marks)
            + i64::from(draft.physics_marks)
            + i64::from(draft.chemistry_marks);

        Self {
            name: draft.name,
            gender: draft.gender,
            email: draft.email,
            contact_number: draft.contact_number,
            address: draft.address,
            mathematics_marks: draft.mathematics_marks,
            physics_marks: draft.physics_marks,
            chemistry_marks: draft.chemistry_marks,
            admission_number: draft.admission_number,
            semester: draft.semester,
            total_marks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn mathematics_marks(&self) -> i32 {
        self.mathematics_marks
    }

    pub fn physics_marks(&self) -> i32 {
        self.physics_marks
    }

    pub fn chemistry_marks(&self) -> i32 {
        self.chemistry_marks
    }

    pub fn admission_number(&self) -> &str {
        &self.admission_number
    }

    pub fn semester(&self) -> &str {
        &self.semester
    }

    pub fn total_marks(&self) -> i64 {
        self.total_marks
    }

    /// Returns the marks recorded for one subject.
    pub fn marks(&self, subject: Subject) -> i32 {
        match subject {
            Subject::Mathematics => self.mathematics_marks,
            Subject::Physics => self.physics_marks,
            Subject::Chemistry => self.chemistry_marks,
        }
    }

    /// Returns whether this record is addressed by a `(name, email)` delete.
    pub fn matches_key(&self, name: &str, email: &str) -> bool {
        self.name == name && self.email == email
    }

    /// Converts back into editable field values, dropping the derived total.
    pub fn into_draft(self) -> StudentDraft {
        StudentDraft {
            name: self.name,
            gender: self.gender,
            email: self.email,
            contact_number: self.contact_number,
            address: self.address,
            mathematics_marks: self.mathematics_marks,
            physics_marks: self.physics_marks,
            chemistry_marks: self.chemistry_marks,
            admission_number: self.admission_number,
            semester: self.semester,
        }
    }
}

impl From<StudentDraft> for StudentRecord {
    fn from(value: StudentDraft) -> Self {
        Self::new(value)
    }
}
