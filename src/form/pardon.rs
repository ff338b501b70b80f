//! Presidential pardon

use crate::form::Outcome;
use crate::grade::Grade;

pub const NAME: &str = "PresidentialPardonForm";
pub const SIGN_GRADE: Grade = Grade::fixed(25);
pub const EXECUTE_GRADE: Grade = Grade::fixed(5);

pub(crate) fn grant(target: &str) -> Outcome {
    Outcome::Pardoned {
        target: target.to_string(),
    }
}

pub(crate) fn report(target: &str) -> String {
    format!("{} has been pardoned by Zaphod Beeblebrox.", target)
}
