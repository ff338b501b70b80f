//! The intern: makes forms by name
//!
//! Lookup is an exact string comparison against a fixed table. No case
//! folding, no trimming.

use serde::Serialize;

use crate::error::InternError;
use crate::form::{pardon, robotomy, shrubbery, Form};
use crate::grade::Grade;

type Constructor = fn(String) -> Form;

/// A form kind the intern knows how to make
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormEntry {
    pub kind: &'static str,
    pub name: &'static str,
    pub sign_grade: Grade,
    pub execute_grade: Grade,
    #[serde(skip)]
    construct: Constructor,
}

static FORM_TABLE: [FormEntry; 3] = [
    FormEntry {
        kind: "shrubbery creation",
        name: shrubbery::NAME,
        sign_grade: shrubbery::SIGN_GRADE,
        execute_grade: shrubbery::EXECUTE_GRADE,
        construct: |target| Form::shrubbery_creation(target),
    },
    FormEntry {
        kind: "robotomy request",
        name: robotomy::NAME,
        sign_grade: robotomy::SIGN_GRADE,
        execute_grade: robotomy::EXECUTE_GRADE,
        construct: |target| Form::robotomy_request(target),
    },
    FormEntry {
        kind: "presidential pardon",
        name: pardon::NAME,
        sign_grade: pardon::SIGN_GRADE,
        execute_grade: pardon::EXECUTE_GRADE,
        construct: |target| Form::presidential_pardon(target),
    },
];

/// Stateless form factory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intern;

impl Intern {
    pub fn new() -> Self {
        Intern
    }

    /// Every form kind the intern can make, in table order
    pub fn catalog(&self) -> &'static [FormEntry] {
        &FORM_TABLE
    }

    /// Names the intern understands, in table order
    pub fn known_kinds(&self) -> impl Iterator<Item = &'static str> {
        FORM_TABLE.iter().map(|entry| entry.kind)
    }

    /// Make the form called `kind` for `target`
    pub fn make_form(&self, kind: &str, target: impl Into<String>) -> Result<Form, InternError> {
        let Some(entry) = FORM_TABLE.iter().find(|entry| entry.kind == kind) else {
            tracing::warn!(kind = %kind, "Intern cannot create unknown form");
            return Err(InternError::UnknownFormKind(kind.to_string()));
        };

        let form = (entry.construct)(target.into());
        tracing::info!("Intern creates {}", kind);
        Ok(form)
    }
}
