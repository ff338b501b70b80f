//! Bureaucrat model
//!
//! A bureaucrat has a fixed name and a grade that can only change through
//! validated steps. Signing and executing forms never fail at the call site:
//! the result is posted on the [`Desk`] instead.

use serde::{Deserialize, Serialize};

use crate::desk::{Desk, Notice};
use crate::error::GradeError;
use crate::form::Form;
use crate::grade::Grade;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bureaucrat {
    name: String,
    #[serde(default)]
    grade: Grade,
}

impl Bureaucrat {
    /// Create a bureaucrat with an explicit grade
    pub fn new(name: impl Into<String>, grade: i64) -> Result<Self, GradeError> {
        let grade = Grade::new(grade)?;
        Ok(Self {
            name: name.into(),
            grade,
        })
    }

    /// Create a bureaucrat at the lowest grade
    pub fn junior(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: Grade::LOWEST,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Replace the grade; on error the current grade is kept
    pub fn set_grade(&mut self, grade: i64) -> Result<(), GradeError> {
        self.grade = Grade::new(grade)?;
        tracing::debug!(bureaucrat = %self.name, grade = %self.grade, "Grade set");
        Ok(())
    }

    /// Move one grade closer to 1
    pub fn promote(&mut self) -> Result<(), GradeError> {
        self.grade = self.grade.raised()?;
        tracing::debug!(bureaucrat = %self.name, grade = %self.grade, "Promoted");
        Ok(())
    }

    /// Move one grade closer to 150
    pub fn demote(&mut self) -> Result<(), GradeError> {
        self.grade = self.grade.lowered()?;
        tracing::debug!(bureaucrat = %self.name, grade = %self.grade, "Demoted");
        Ok(())
    }

    /// Try to sign `form`, posting the result on `desk`
    pub fn sign_form(&self, form: &mut Form, desk: &mut Desk) {
        let notice = match form.sign(self) {
            Ok(()) => Notice::Signed {
                bureaucrat: self.name.clone(),
                form: form.name().to_string(),
            },
            Err(e) => Notice::SignRefused {
                bureaucrat: self.name.clone(),
                form: form.name().to_string(),
                reason: e.to_string(),
            },
        };
        desk.post(notice);
    }

    /// Try to execute `form`, posting the result on `desk`
    pub fn execute_form(&self, form: &Form, desk: &mut Desk) {
        let notice = match form.execute(self, desk) {
            Ok(outcome) => Notice::Executed {
                bureaucrat: self.name.clone(),
                form: form.name().to_string(),
                outcome,
            },
            Err(e) => Notice::ExecuteRefused {
                bureaucrat: self.name.clone(),
                form: form.name().to_string(),
                reason: e.to_string(),
            },
        };
        desk.post(notice);
    }
}

impl Default for Bureaucrat {
    fn default() -> Self {
        Self::junior("none")
    }
}

impl std::fmt::Display for Bureaucrat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, bureaucrat grade {}.", self.name, self.grade)
    }
}
