//! Error types for the bureau

use std::path::PathBuf;

use thiserror::Error;

/// A grade fell outside `1..=150`.
///
/// Grade 1 is the strongest, so a value below 1 is "too high" and a value
/// above 150 is "too low".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeError {
    #[error("grade {0} is too high (highest grade is 1)")]
    TooHigh(i64),

    #[error("grade {0} is too low (lowest grade is 150)")]
    TooLow(i64),
}

/// Failures raised by a form while it is built, signed or executed
#[derive(Error, Debug)]
pub enum FormError {
    #[error("invalid form threshold: {0}")]
    Grade(#[from] GradeError),

    #[error("grade {grade} is too low, grade {required} is required")]
    GradeTooLow { grade: u8, required: u8 },

    #[error("form {0} is not signed")]
    NotSigned(String),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised by the intern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    #[error("unknown form kind: \"{0}\"")]
    UnknownFormKind(String),
}

/// Any bureau error
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Grade(#[from] GradeError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Intern(#[from] InternError),
}

pub type Result<T> = std::result::Result<T, Error>;
