//! Grade model
//!
//! A grade is an authority level in `1..=150`. Lower numbers carry more
//! authority: grade 1 outranks everyone, grade 150 outranks no one.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// A validated authority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Grade(u8);

impl Grade {
    /// The strongest grade
    pub const HIGHEST: Grade = Grade(1);
    /// The weakest grade, given to new bureaucrats by default
    pub const LOWEST: Grade = Grade(150);

    /// Validate a raw grade value
    pub fn new(value: i64) -> Result<Self, GradeError> {
        if value < Self::HIGHEST.0 as i64 {
            return Err(GradeError::TooHigh(value));
        }
        if value > Self::LOWEST.0 as i64 {
            return Err(GradeError::TooLow(value));
        }
        Ok(Grade(value as u8))
    }

    /// Build a grade from a constant known to be in range
    pub(crate) const fn fixed(value: u8) -> Self {
        assert!(value >= 1 && value <= 150, "fixed grade out of range");
        Grade(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// One step towards grade 1
    pub fn raised(&self) -> Result<Self, GradeError> {
        Self::new(self.0 as i64 - 1)
    }

    /// One step towards grade 150
    pub fn lowered(&self) -> Result<Self, GradeError> {
        Self::new(self.0 as i64 + 1)
    }

    /// Check whether this grade meets a form threshold.
    ///
    /// The threshold is inclusive: grade 145 satisfies a threshold of 145.
    pub fn satisfies(&self, threshold: Grade) -> bool {
        self.0 <= threshold.0
    }
}

impl Default for Grade {
    fn default() -> Self {
        Grade::LOWEST
    }
}

impl TryFrom<i64> for Grade {
    type Error = GradeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Grade::new(value)
    }
}

impl From<Grade> for i64 {
    fn from(grade: Grade) -> Self {
        grade.0 as i64
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
