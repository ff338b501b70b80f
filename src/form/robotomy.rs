//! Robotomy request: drilling noises, then a coin flip

use rand::Rng;

use crate::form::Outcome;
use crate::grade::Grade;

pub const NAME: &str = "RobotomyRequestForm";
pub const SIGN_GRADE: Grade = Grade::fixed(72);
pub const EXECUTE_GRADE: Grade = Grade::fixed(45);

pub const DRILLING_NOISES: &str = "* DRILLING NOISES * BZZZzzzzZZZZ... WHIRRRRR... BZZZZZZ...";

/// Half the time the robotomy works
pub(crate) fn operate<R: Rng>(target: &str, rng: &mut R) -> Outcome {
    let success = rng.gen_bool(0.5);
    Outcome::Robotomized {
        target: target.to_string(),
        success,
    }
}

pub(crate) fn report(target: &str, success: bool) -> String {
    if success {
        format!("{} has been robotomized successfully!", target)
    } else {
        format!("Robotomy of {} failed!", target)
    }
}
