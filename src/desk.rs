//! The desk: where signing and execution reports land
//!
//! Bureaucrats never hand a failed signature or execution back to their
//! caller. Every attempt ends up as a [`Notice`] posted on a [`Desk`], which
//! also carries what an execution needs from its surroundings (the directory
//! shrubbery files are planted in and the robotomy coin).

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::form::Outcome;

/// Report of a single signing or execution attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    Signed {
        bureaucrat: String,
        form: String,
    },
    SignRefused {
        bureaucrat: String,
        form: String,
        reason: String,
    },
    Executed {
        bureaucrat: String,
        form: String,
        outcome: Outcome,
    },
    ExecuteRefused {
        bureaucrat: String,
        form: String,
        reason: String,
    },
}

impl Notice {
    /// Whether the attempt was turned down
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Notice::SignRefused { .. } | Notice::ExecuteRefused { .. }
        )
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Signed { bureaucrat, form } => write!(f, "{} signed {}", bureaucrat, form),
            Notice::SignRefused {
                bureaucrat,
                form,
                reason,
            } => write!(f, "{} couldn't sign {} because {}.", bureaucrat, form, reason),
            Notice::Executed {
                bureaucrat,
                form,
                outcome,
            } => {
                for line in outcome.lines() {
                    writeln!(f, "{}", line)?;
                }
                write!(f, "{} executed {}", bureaucrat, form)
            }
            Notice::ExecuteRefused {
                bureaucrat,
                form,
                reason,
            } => write!(
                f,
                "{} couldn't execute {} because {}.",
                bureaucrat, form, reason
            ),
        }
    }
}

/// Execution context and notice log
#[derive(Debug)]
pub struct Desk {
    output_dir: PathBuf,
    rng: StdRng,
    notices: Vec<Notice>,
}

impl Desk {
    /// A desk in the working directory with an entropy-seeded coin
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            rng: StdRng::from_entropy(),
            notices: Vec::new(),
        }
    }

    /// Plant shrubbery files in `dir` instead of the working directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Make the robotomy coin reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Record a notice
    pub fn post(&mut self, notice: Notice) {
        match &notice {
            Notice::Signed { bureaucrat, form } => {
                tracing::debug!(bureaucrat = %bureaucrat, form = %form, "Form signed");
            }
            Notice::Executed {
                bureaucrat,
                form,
                outcome,
            } => {
                tracing::info!(bureaucrat = %bureaucrat, form = %form, ?outcome, "Form executed");
            }
            Notice::SignRefused {
                bureaucrat,
                form,
                reason,
            } => {
                tracing::warn!(bureaucrat = %bureaucrat, form = %form, "Signature refused: {}", reason);
            }
            Notice::ExecuteRefused {
                bureaucrat,
                form,
                reason,
            } => {
                tracing::warn!(bureaucrat = %bureaucrat, form = %form, "Execution refused: {}", reason);
            }
        }
        self.notices.push(notice);
    }

    /// Notices posted so far, oldest first
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Take every posted notice, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}
