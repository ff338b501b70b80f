//! Scenario files
//!
//! A scenario declares the staff and a list of steps:
//!
//! ```json
//! {
//!   "staff": [{ "name": "Boss", "grade": 1 }],
//!   "steps": [
//!     { "action": "make", "kind": "robotomy request", "target": "Bender" },
//!     { "action": "sign", "by": "Boss", "form": 0 },
//!     { "action": "execute", "by": "Boss", "form": 0 }
//!   ]
//! }
//! ```
//!
//! Forms are numbered from 0 in the order they are made.

use std::collections::HashMap;
use std::path::Path;

use bureau::{Bureaucrat, Desk, Form, Intern};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("could not read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("bureaucrat {0} is listed more than once")]
    DuplicateBureaucrat(String),

    #[error("unknown bureaucrat: {0}")]
    UnknownBureaucrat(String),

    #[error("no form #{0} has been made")]
    UnknownForm(usize),

    #[error("step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: bureau::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Make { kind: String, target: String },
    Sign { by: String, form: usize },
    Execute { by: String, form: usize },
    Promote { who: String },
    Demote { who: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub staff: Vec<Bureaucrat>,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Play every step in order, posting notices on `desk`.
    ///
    /// Returns the forms in their final state. Grade changes and form
    /// creation abort the run on failure; signing and execution never do.
    pub fn run(&self, desk: &mut Desk) -> Result<Vec<Form>, ScenarioError> {
        let intern = Intern::new();
        let mut staff: HashMap<&str, Bureaucrat> = HashMap::new();
        for bureaucrat in &self.staff {
            if staff.insert(bureaucrat.name(), bureaucrat.clone()).is_some() {
                return Err(ScenarioError::DuplicateBureaucrat(
                    bureaucrat.name().to_string(),
                ));
            }
        }
        let mut forms: Vec<Form> = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(index, ?step, "Playing step");
            match step {
                Step::Make { kind, target } => {
                    let form = intern
                        .make_form(kind, target.as_str())
                        .map_err(|e| ScenarioError::Step {
                            step: index,
                            source: e.into(),
                        })?;
                    forms.push(form);
                }
                Step::Sign { by, form } => {
                    let bureaucrat = lookup(&staff, by)?;
                    let form = forms.get_mut(*form).ok_or(ScenarioError::UnknownForm(*form))?;
                    bureaucrat.sign_form(form, desk);
                }
                Step::Execute { by, form } => {
                    let bureaucrat = lookup(&staff, by)?;
                    let form = forms.get(*form).ok_or(ScenarioError::UnknownForm(*form))?;
                    bureaucrat.execute_form(form, desk);
                }
                Step::Promote { who } | Step::Demote { who } => {
                    let bureaucrat = staff
                        .get_mut(who.as_str())
                        .ok_or_else(|| ScenarioError::UnknownBureaucrat(who.clone()))?;
                    let result = match step {
                        Step::Promote { .. } => bureaucrat.promote(),
                        _ => bureaucrat.demote(),
                    };
                    result.map_err(|e| ScenarioError::Step {
                        step: index,
                        source: e.into(),
                    })?;
                }
            }
        }

        Ok(forms)
    }
}

fn lookup<'a>(
    staff: &'a HashMap<&str, Bureaucrat>,
    name: &str,
) -> Result<&'a Bureaucrat, ScenarioError> {
    staff
        .get(name)
        .ok_or_else(|| ScenarioError::UnknownBureaucrat(name.to_string()))
}
