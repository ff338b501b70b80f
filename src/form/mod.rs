//! Forms: documents gated by sign and execute thresholds
//!
//! A form starts unsigned. Signing flips it to signed once and for all;
//! executing requires the signature and a grade at or above the execute
//! threshold, then runs the effect belonging to the form's kind.

pub mod pardon;
pub mod robotomy;
pub mod shrubbery;

use std::path::PathBuf;

use serde::Serialize;

use crate::bureaucrat::Bureaucrat;
use crate::desk::Desk;
use crate::error::FormError;
use crate::grade::Grade;

/// What a form does when executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormKind {
    /// Paperwork with no effect beyond being executed
    Plain,
    ShrubberyCreation { target: String },
    RobotomyRequest { target: String },
    PresidentialPardon { target: String },
}

impl FormKind {
    pub fn target(&self) -> Option<&str> {
        match self {
            FormKind::Plain => None,
            FormKind::ShrubberyCreation { target }
            | FormKind::RobotomyRequest { target }
            | FormKind::PresidentialPardon { target } => Some(target),
        }
    }
}

/// Result of a successful execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Filed,
    Planted { path: PathBuf },
    Robotomized { target: String, success: bool },
    Pardoned { target: String },
}

impl Outcome {
    /// Messages the execution emitted, in order
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Filed => Vec::new(),
            Outcome::Planted { path } => vec![shrubbery::report(path)],
            Outcome::Robotomized { target, success } => vec![
                robotomy::DRILLING_NOISES.to_string(),
                robotomy::report(target, *success),
            ],
            Outcome::Pardoned { target } => vec![pardon::report(target)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Form {
    name: String,
    signed: bool,
    sign_grade: Grade,
    execute_grade: Grade,
    #[serde(flatten)]
    kind: FormKind,
}

impl Form {
    /// Create a plain form, validating both thresholds
    pub fn new(
        name: impl Into<String>,
        sign_grade: i64,
        execute_grade: i64,
    ) -> Result<Self, FormError> {
        let sign_grade = Grade::new(sign_grade)?;
        let execute_grade = Grade::new(execute_grade)?;
        Ok(Self::with_kind(
            name.into(),
            sign_grade,
            execute_grade,
            FormKind::Plain,
        ))
    }

    pub fn shrubbery_creation(target: impl Into<String>) -> Self {
        Self::with_kind(
            shrubbery::NAME.to_string(),
            shrubbery::SIGN_GRADE,
            shrubbery::EXECUTE_GRADE,
            FormKind::ShrubberyCreation {
                target: target.into(),
            },
        )
    }

    pub fn robotomy_request(target: impl Into<String>) -> Self {
        Self::with_kind(
            robotomy::NAME.to_string(),
            robotomy::SIGN_GRADE,
            robotomy::EXECUTE_GRADE,
            FormKind::RobotomyRequest {
                target: target.into(),
            },
        )
    }

    pub fn presidential_pardon(target: impl Into<String>) -> Self {
        Self::with_kind(
            pardon::NAME.to_string(),
            pardon::SIGN_GRADE,
            pardon::EXECUTE_GRADE,
            FormKind::PresidentialPardon {
                target: target.into(),
            },
        )
    }

    fn with_kind(name: String, sign_grade: Grade, execute_grade: Grade, kind: FormKind) -> Self {
        Self {
            name,
            signed: false,
            sign_grade,
            execute_grade,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn sign_grade(&self) -> Grade {
        self.sign_grade
    }

    pub fn execute_grade(&self) -> Grade {
        self.execute_grade
    }

    pub fn kind(&self) -> &FormKind {
        &self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.kind.target()
    }

    /// Put `signer`'s signature on the form.
    ///
    /// A form that is already signed stays signed and accepts without
    /// checking the signer again.
    pub fn sign(&mut self, signer: &Bureaucrat) -> Result<(), FormError> {
        if self.signed {
            return Ok(());
        }
        if !signer.grade().satisfies(self.sign_grade) {
            return Err(FormError::GradeTooLow {
                grade: signer.grade().value(),
                required: self.sign_grade.value(),
            });
        }
        self.signed = true;
        Ok(())
    }

    /// Check that `executor` may execute this form right now
    pub fn check_executable(&self, executor: &Bureaucrat) -> Result<(), FormError> {
        if !self.signed {
            return Err(FormError::NotSigned(self.name.clone()));
        }
        if !executor.grade().satisfies(self.execute_grade) {
            return Err(FormError::GradeTooLow {
                grade: executor.grade().value(),
                required: self.execute_grade.value(),
            });
        }
        Ok(())
    }

    /// Execute the form on behalf of `executor`.
    ///
    /// Nothing happens unless [`Form::check_executable`] passes.
    pub fn execute(&self, executor: &Bureaucrat, desk: &mut Desk) -> Result<Outcome, FormError> {
        self.check_executable(executor)?;

        match &self.kind {
            FormKind::Plain => Ok(Outcome::Filed),
            FormKind::ShrubberyCreation { target } => shrubbery::plant(desk.output_dir(), target),
            FormKind::RobotomyRequest { target } => Ok(robotomy::operate(target, desk.rng())),
            FormKind::PresidentialPardon { target } => Ok(pardon::grant(target)),
        }
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, signed: {}, grade required to sign: {}, grade required to execute: {}",
            self.name,
            if self.signed { "yes" } else { "no" },
            self.sign_grade,
            self.execute_grade
        )
    }
}
