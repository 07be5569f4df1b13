//! Generates and prints a month for the two-person starter roster.
//!
//! ```text
//! monthly-rota 2025 6 --config planner.toml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Datelike, Local};
use clap::Parser;
use owo_colors::OwoColorize;
use shiftforge::console;
use shiftforge::prelude::*;
use shiftforge::{ConfigError, Employee};

#[derive(Debug, Parser)]
#[command(name = "monthly-rota", about = "Generate a monthly shift rota")]
struct Args {
    /// Year to plan; defaults to the current year.
    year: Option<i32>,

    /// Month to plan (1-12); defaults to the current month.
    month: Option<u32>,

    /// Planner configuration file.
    #[arg(long, default_value = "planner.toml")]
    config: PathBuf,

    /// Days to lock after the first generation and regenerate around.
    #[arg(long, value_delimiter = ',')]
    lock: Vec<u32>,
}

fn load_config(path: &Path) -> Result<PlannerConfig, ConfigError> {
    match PlannerConfig::load(path) {
        Err(ConfigError::Io(_)) => Ok(PlannerConfig::default()),
        other => other,
    }
}

fn main() -> ExitCode {
    console::init();
    let args = Args::parse();

    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}: {}", "error:".bright_red().bold(), args.config.display(), e);
            return ExitCode::from(2);
        }
    };

    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());

    let mut plan = match MonthPlan::for_month(year, month, config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            return ExitCode::from(2);
        }
    };
    for employee in [
        Employee::new(EmployeeId(1), "Sato", 8),
        Employee::new(EmployeeId(2), "Tanaka", 10),
    ] {
        if let Err(e) = plan.insert_employee(employee) {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            return ExitCode::FAILURE;
        }
    }

    plan.generate();
    if !args.lock.is_empty() {
        for &day in &args.lock {
            plan.set_lock(day, true);
        }
        plan.generate();
    }

    println!();
    print!(
        "{}",
        console::render_grid(plan.calendar(), plan.roster(), plan.assignment(), plan.locks())
    );
    println!();
    print!("{}", console::render_report(&plan.diagnose()));

    ExitCode::SUCCESS
}
