//! Closed set of graded subjects and their store columns.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Subject recognized by grading and semester-series queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
}

/// Returned when caller text does not name a recognized subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubjectError(pub String);

impl Display for UnknownSubjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown subject `{}`; expected Mathematics|Physics|Chemistry",
            self.0
        )
    }
}

impl Error for UnknownSubjectError {}

impl Subject {
    /// All subjects in the order the grading view lists them.
    pub const ALL: [Subject; 3] = [Self::Mathematics, Self::Physics, Self::Chemistry];

    /// Parses an interface-level subject name.
    ///
    /// Matching is case-sensitive: `"Physics"` is accepted, `"physics"` is not.
    pub fn parse(value: &str) -> Result<Self, UnknownSubjectError> {
        match value {
            "Mathematics" => Ok(Self::Mathematics),
            "Physics" => Ok(Self::Physics),
            "Chemistry" => Ok(Self::Chemistry),
            other => Err(UnknownSubjectError(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
        }
    }

    /// Store column holding this subject's marks.
    pub fn column(self) -> &'static str {
        match self {
            Self::Mathematics => "mathematics_marks",
            Self::Physics => "physics_marks",
            Self::Chemistry => "chemistry_marks",
        }
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
