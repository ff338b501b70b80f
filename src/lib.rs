//! Bureau - bureaucrats, forms and the intern who makes them
//!
//! Bureaucrats hold a grade between 1 (strongest) and 150 (weakest). Forms
//! carry a sign threshold and an execute threshold; a bureaucrat may sign or
//! execute a form only if their grade is at or above the threshold.

pub mod bureaucrat;
pub mod desk;
pub mod error;
pub mod form;
pub mod grade;
pub mod intern;

pub use bureaucrat::Bureaucrat;
pub use desk::{Desk, Notice};
pub use error::{Error, FormError, GradeError, InternError, Result};
pub use form::{Form, FormKind, Outcome};
pub use grade::Grade;
pub use intern::{FormEntry, Intern};
