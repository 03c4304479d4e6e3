//! Self-verification of the bundled examples

use crate::error::CliError;
use crate::report::DayKey;
use crate::runner::Selection;
use aoc_day::{Example, SolverError, SolverRegistry};

/// How one example fared
#[derive(Debug)]
pub enum CheckOutcome {
    /// Produced the expected answer
    Ok,
    /// Produced a different answer
    Mismatch { actual: String },
    /// Parsing or solving failed
    Error(SolverError),
}

/// One bundled example solved through the registry
#[derive(Debug)]
pub struct ExampleCheck {
    pub key: DayKey,
    /// Position of the example among its module's examples, from 1
    pub index: usize,
    pub example: Example,
    pub outcome: CheckOutcome,
}

impl ExampleCheck {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Ok)
    }
}

/// Solve every selected example and compare it with its expected answer
pub fn check_examples(registry: &SolverRegistry, selection: &Selection) -> Vec<ExampleCheck> {
    let part = selection.part;
    registry
        .storage()
        .iter_info()
        .filter(|info| selection.matches(info))
        .flat_map(move |info| {
            info.examples
                .iter()
                .enumerate()
                .filter(move |(_, example)| part.is_none_or(|p| p == example.part))
                .map(move |(i, &example)| ExampleCheck {
                    key: DayKey {
                        year: info.year,
                        day: info.day,
                    },
                    index: i + 1,
                    example,
                    outcome: check(registry, info.year, info.day, &example),
                })
        })
        .collect()
}

fn check(registry: &SolverRegistry, year: u16, day: u8, example: &Example) -> CheckOutcome {
    let answer = registry
        .create_solver(year, day, example.input)
        .and_then(|mut solver| Ok(solver.solve(example.part)?.answer));

    match answer {
        Ok(actual) if actual == example.expected => CheckOutcome::Ok,
        Ok(actual) => CheckOutcome::Mismatch { actual },
        Err(e) => CheckOutcome::Error(e),
    }
}

/// Run the example checks, print one line per example, and fail on any miss
pub fn verify_examples(registry: &SolverRegistry, selection: &Selection, quiet: bool) -> Result<usize, CliError> {
    let checks = check_examples(registry, selection);

    for check in &checks {
        let label = format!("{} part {} example {}", check.key, check.example.part, check.index);
        match &check.outcome {
            CheckOutcome::Ok if quiet => {}
            CheckOutcome::Ok => println!("{}: ok", label),
            CheckOutcome::Mismatch { actual } => println!(
                "{}: MISMATCH (expected {:?}, got {:?})",
                label, check.example.expected, actual
            ),
            CheckOutcome::Error(e) => println!("{}: error ({})", label, e),
        }
    }

    let total = checks.len();
    let failed = checks.iter().filter(|c| !c.passed()).count();
    if !quiet {
        println!();
        println!("Examples: {} passed, {} failed", total - failed, failed);
    }

    if failed > 0 {
        return Err(CliError::ExampleMismatch { failed, total });
    }
    Ok(total)
}
