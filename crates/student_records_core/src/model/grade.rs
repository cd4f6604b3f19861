//! Letter-grade classification for subject marks.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade derived from a single subject mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    S,
    F,
}

impl Grade {
    /// Classifies a mark using the fixed range table.
    ///
    /// Ranges are evaluated top-down: `75..=100` is A, `65..=74` is B,
    /// `55..=64` is C, `35..=54` is S. Everything else, including negative
    /// values and marks above 100, is F.
    pub fn from_marks(marks: i32) -> Self {
        match marks {
            75..=100 => Self::A,
            65..=74 => Self::B,
            55..=64 => Self::C,
            35..=54 => Self::S,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::S => "S",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
