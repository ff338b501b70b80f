//! Bureau CLI - sign and execute forms from the command line

mod demo;
mod scenario;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use bureau::{Bureaucrat, Desk, Intern, Notice};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bureau")]
#[command(about = "CLI for Bureau - bureaucrats, forms and the intern who makes them")]
#[command(version)]
struct Cli {
    /// Directory shrubbery files are planted in
    #[arg(short, long, env = "BUREAU_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Seed for the robotomy coin (random if not set)
    #[arg(long, env = "BUREAU_SEED")]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the forms the intern can make
    Kinds,

    /// Have one bureaucrat sign and execute a freshly made form
    Process {
        /// Form kind, e.g. "robotomy request"
        #[arg(short, long)]
        kind: String,

        /// Form target
        #[arg(short, long)]
        target: String,

        /// Bureaucrat name
        #[arg(short = 'n', long, default_value = "Clerk")]
        name: String,

        /// Bureaucrat grade (1 is the highest)
        #[arg(short, long, default_value_t = 150, allow_negative_numbers = true)]
        grade: i64,
    },

    /// Walk through the office: every form, good and bad requests
    Demo,

    /// Play a JSON scenario file
    Run {
        /// Scenario file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bureau=info,bureau_cli=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut desk = Desk::new().with_output_dir(&cli.output_dir);
    if let Some(seed) = cli.seed {
        desk = desk.with_seed(seed);
    }

    match cli.command {
        Commands::Kinds => run_kinds(cli.json),
        Commands::Process {
            kind,
            target,
            name,
            grade,
        } => run_process(&mut desk, &kind, &target, &name, grade, cli.json),
        Commands::Demo => {
            demo::run(&mut desk);
            Ok(())
        }
        Commands::Run { path } => run_scenario(&mut desk, &path, cli.json),
    }
}

fn print_notices(notices: &[Notice], json: bool) -> Result<()> {
    write_notices(&mut std::io::stdout().lock(), notices, json)
}

/// One JSON object per line with `json`, otherwise the plain reports
fn write_notices(out: &mut impl Write, notices: &[Notice], json: bool) -> Result<()> {
    for notice in notices {
        if json {
            writeln!(out, "{}", serde_json::to_string(notice)?)?;
        } else {
            writeln!(out, "{}", notice)?;
        }
    }
    Ok(())
}

fn run_kinds(json: bool) -> Result<()> {
    let intern = Intern::new();

    if json {
        println!("{}", serde_json::to_string_pretty(intern.catalog())?);
        return Ok(());
    }

    println!("Forms:");
    println!("{:─<60}", "");
    for entry in intern.catalog() {
        println!(
            "  {:<22} sign: {:>3}  execute: {:>3}",
            entry.kind, entry.sign_grade, entry.execute_grade
        );
    }

    Ok(())
}

fn run_process(
    desk: &mut Desk,
    kind: &str,
    target: &str,
    name: &str,
    grade: i64,
    json: bool,
) -> Result<()> {
    let bureaucrat = Bureaucrat::new(name, grade)?;
    let mut form = Intern::new().make_form(kind, target)?;

    if !json {
        println!("{}", bureaucrat);
        println!("{}", form);
    }

    bureaucrat.sign_form(&mut form, desk);
    bureaucrat.execute_form(&form, desk);

    print_notices(&desk.drain(), json)
}

fn run_scenario(desk: &mut Desk, path: &std::path::Path, json: bool) -> Result<()> {
    let scenario = scenario::Scenario::load(path)?;
    let result = scenario.run(desk);

    // Notices posted before a failing step are still worth showing
    print_notices(&desk.drain(), json)?;
    let forms = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forms)?);
    } else {
        println!("{:─<60}", "");
        for form in &forms {
            println!("{}", form);
        }
    }

    Ok(())
}
