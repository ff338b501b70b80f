//! Office integration tests
//!
//! Interns make forms, bureaucrats sign and execute them, and the desk
//! collects what happened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bureau::{Bureaucrat, Desk, FormError, Intern, InternError, Notice, Outcome};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Counts every event, whatever its level
struct EventCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for EventCounter {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn desk_in(dir: &tempfile::TempDir) -> Desk {
    Desk::new().with_output_dir(dir.path()).with_seed(42)
}

#[test]
fn test_robotomy_request_from_intern() {
    let intern = Intern::new();
    let mut form = intern.make_form("robotomy request", "Bender").unwrap();
    assert_eq!(form.target(), Some("Bender"));

    let boss = Bureaucrat::new("Boss", 1).unwrap();
    let mut desk = Desk::new().with_seed(1);
    boss.sign_form(&mut form, &mut desk);
    boss.execute_form(&form, &mut desk);

    let notices = desk.drain();
    assert_eq!(notices.len(), 2);
    assert!(matches!(notices[0], Notice::Signed { .. }));
    match &notices[1] {
        Notice::Executed { outcome, .. } => {
            assert!(matches!(outcome, Outcome::Robotomized { target, .. } if target == "Bender"));
            let lines = outcome.lines();
            assert_eq!(
                lines[0],
                "* DRILLING NOISES * BZZZzzzzZZZZ... WHIRRRRR... BZZZZZZ..."
            );
            assert!(
                lines[1] == "Bender has been robotomized successfully!"
                    || lines[1] == "Robotomy of Bender failed!"
            );
        }
        other => panic!("expected execution, got {:?}", other),
    }
}

#[test]
fn test_robotomy_is_reproducible_per_seed() {
    let boss = Bureaucrat::new("Boss", 1).unwrap();
    let mut form = Intern::new().make_form("robotomy request", "Bender").unwrap();

    let run = |seed: u64, form: &mut bureau::Form| {
        let mut desk = Desk::new().with_seed(seed);
        boss.sign_form(form, &mut desk);
        boss.execute_form(form, &mut desk);
        desk.drain()
    };

    assert_eq!(run(9, &mut form), run(9, &mut form));
}

#[test]
fn test_shrubbery_planted_in_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut desk = desk_in(&dir);

    let mut form = Intern::new().make_form("shrubbery creation", "home").unwrap();
    let bob = Bureaucrat::new("Bob", 100).unwrap();
    bob.sign_form(&mut form, &mut desk);
    bob.execute_form(&form, &mut desk);

    let path = dir.path().join("home_shrubbery");
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, bureau::form::shrubbery::SHRUBBERY);
    assert_eq!(
        desk.last_notice().unwrap(),
        &Notice::Executed {
            bureaucrat: "Bob".to_string(),
            form: "ShrubberyCreationForm".to_string(),
            outcome: Outcome::Planted { path },
        }
    );
}

#[test]
fn test_shrubbery_write_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut desk = Desk::new().with_output_dir(dir.path().join("missing"));

    let mut form = bureau::Form::shrubbery_creation("home");
    let bob = Bureaucrat::new("Bob", 1).unwrap();
    bob.sign_form(&mut form, &mut desk);
    bob.execute_form(&form, &mut desk);

    let notice = desk.last_notice().unwrap();
    assert!(matches!(notice, Notice::ExecuteRefused { .. }));
    assert!(notice.to_string().starts_with("Bob couldn't execute ShrubberyCreationForm because could not write"));
}

#[test]
fn test_signing_boundary() {
    let mut desk = Desk::new();
    let mut form = Intern::new().make_form("shrubbery creation", "home").unwrap();

    Bureaucrat::new("Slow", 146).unwrap().sign_form(&mut form, &mut desk);
    assert!(!form.is_signed());

    Bureaucrat::new("Steady", 145).unwrap().sign_form(&mut form, &mut desk);
    assert!(form.is_signed());

    let refusals = desk.notices().iter().filter(|n| n.is_refusal()).count();
    assert_eq!(refusals, 1);
}

#[test]
fn test_execute_without_signature_always_fails() {
    let intern = Intern::new();
    let dir = tempfile::tempdir().unwrap();
    let mut desk = desk_in(&dir);

    for kind in intern.known_kinds() {
        let form = intern.make_form(kind, "nobody").unwrap();
        for grade in [1, 75, 150] {
            let executor = Bureaucrat::new("Exec", grade).unwrap();
            assert!(matches!(
                form.execute(&executor, &mut desk),
                Err(FormError::NotSigned(_))
            ));
        }
    }
    assert!(!dir.path().join("nobody_shrubbery").exists());
}

#[test]
fn test_second_signature_does_not_recheck() {
    let mut desk = Desk::new();
    let mut form = Intern::new().make_form("presidential pardon", "Ford").unwrap();

    Bureaucrat::new("President", 1).unwrap().sign_form(&mut form, &mut desk);
    Bureaucrat::junior("Clerk").sign_form(&mut form, &mut desk);

    assert!(form.is_signed());
    assert!(desk.notices().iter().all(|n| !n.is_refusal()));
}

#[test]
fn test_pardon_execute_threshold() {
    let mut desk = Desk::new();
    let mut form = Intern::new().make_form("presidential pardon", "Arthur Dent").unwrap();
    Bureaucrat::new("President", 1).unwrap().sign_form(&mut form, &mut desk);

    Bureaucrat::new("Six", 6).unwrap().execute_form(&form, &mut desk);
    assert_eq!(
        desk.last_notice().unwrap().to_string(),
        "Six couldn't execute PresidentialPardonForm because grade 6 is too low, grade 5 is required."
    );

    Bureaucrat::new("Five", 5).unwrap().execute_form(&form, &mut desk);
    assert_eq!(
        desk.last_notice().unwrap().to_string(),
        "Arthur Dent has been pardoned by Zaphod Beeblebrox.\nFive executed PresidentialPardonForm"
    );
}

#[test]
fn test_unknown_form_kinds() {
    let intern = Intern::new();
    for kind in ["Robotomy Request", "robotomy  request", "coffee making"] {
        assert_eq!(
            intern.make_form(kind, "Bender").unwrap_err(),
            InternError::UnknownFormKind(kind.to_string())
        );
    }
}

#[test]
fn test_promotion_unlocks_signature() {
    let mut desk = Desk::new();
    let mut form = bureau::Form::new("27B/6", 42, 42).unwrap();
    let mut clerk = Bureaucrat::new("Clerk", 43).unwrap();

    clerk.sign_form(&mut form, &mut desk);
    assert!(!form.is_signed());

    clerk.promote().unwrap();
    clerk.sign_form(&mut form, &mut desk);
    clerk.execute_form(&form, &mut desk);

    assert_eq!(
        desk.last_notice().unwrap(),
        &Notice::Executed {
            bureaucrat: "Clerk".to_string(),
            form: "27B/6".to_string(),
            outcome: Outcome::Filed,
        }
    );
}

#[test]
fn test_one_boss_processes_every_kind() {
    let dir = tempfile::tempdir().unwrap();
    let mut desk = desk_in(&dir);
    let intern = Intern::new();
    let boss = Bureaucrat::new("Boss", 1).unwrap();

    let targets = ["garden", "Employee", "Criminal"];
    let kinds: Vec<&str> = intern.known_kinds().collect();
    for (kind, target) in kinds.iter().zip(targets) {
        let mut form = intern.make_form(kind, target).unwrap();
        boss.sign_form(&mut form, &mut desk);
        boss.execute_form(&form, &mut desk);
    }

    assert_eq!(desk.notices().len(), 6);
    assert!(desk.notices().iter().all(|n| !n.is_refusal()));
    assert!(dir.path().join("garden_shrubbery").exists());
}

#[test]
fn test_one_log_event_per_action() {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(EventCounter(count.clone()));
    let dir = tempfile::tempdir().unwrap();

    tracing::subscriber::with_default(subscriber, || {
        let mut desk = desk_in(&dir);
        let boss = Bureaucrat::new("Boss", 1).unwrap();
        let mut forms = [
            bureau::Form::shrubbery_creation("garden"),
            bureau::Form::robotomy_request("Bender"),
            bureau::Form::presidential_pardon("Ford"),
        ];
        for form in forms.iter_mut() {
            boss.sign_form(form, &mut desk);
            boss.execute_form(form, &mut desk);
        }
        assert_eq!(desk.notices().len(), 6);
    });

    assert_eq!(count.load(Ordering::SeqCst), 6);
}
