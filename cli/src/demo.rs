//! Guided tour of the office

use bureau::{Bureaucrat, Desk, Intern};

fn section(title: &str) {
    println!("\n========== {} ==========", title);
}

fn flush(desk: &mut Desk) {
    for notice in desk.drain() {
        println!("{}", notice);
    }
}

/// Make a form, print it, then have `name` sign and execute it
fn process(
    intern: &Intern,
    desk: &mut Desk,
    kind: &str,
    target: &str,
    name: &str,
    grade: i64,
) -> bureau::Result<()> {
    let mut form = intern.make_form(kind, target)?;
    let bureaucrat = Bureaucrat::new(name, grade)?;

    println!("{}", form);
    println!("{}", bureaucrat);
    bureaucrat.sign_form(&mut form, desk);
    bureaucrat.execute_form(&form, desk);
    flush(desk);
    Ok(())
}

fn report(result: bureau::Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}

pub fn run(desk: &mut Desk) {
    let intern = Intern::new();

    section("INTERN CREATION");
    report(process(&intern, desk, "shrubbery creation", "home", "Bob", 100));
    report(process(&intern, desk, "robotomy request", "Bender", "Alice", 40));
    report(process(&intern, desk, "presidential pardon", "Arthur Dent", "President", 1));

    section("NOT ENOUGH AUTHORITY");
    report(process(&intern, desk, "presidential pardon", "Ford Prefect", "Clerk", 26));
    report(process(&intern, desk, "robotomy request", "Marvin", "Technician", 50));

    section("INVALID GRADES");
    for grade in [0, 151, -5] {
        match Bureaucrat::new("Nobody", grade) {
            Ok(b) => println!("{}", b),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    section("INVALID FORMS");
    for kind in [
        "coffee making",
        "robotomy requets",
        "",
        "ROBOTOMY REQUEST",
        "Robotomy Request",
        "robotomy  request",
        " robotomy request",
    ] {
        if let Err(e) = intern.make_form(kind, "Target") {
            eprintln!("Error: {}", e);
        }
    }

    section("ONE BOSS, EVERY FORM");
    let targets = ["garden", "Employee", "Criminal"];
    for (kind, target) in intern.known_kinds().zip(targets) {
        report(process(&intern, desk, kind, target, "Boss", 1));
    }
}
