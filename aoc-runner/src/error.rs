//! Error types for the runner

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_day::RegistrationError),

    /// One or more days failed during the run
    #[error("{0}")]
    Run(#[from] ArcRunError),

    /// Bundled examples produced the wrong answer or failed
    #[error("{failed} of {total} example(s) did not produce the expected answer")]
    ExampleMismatch { failed: usize, total: usize },
}

/// Failures recorded against a day or part in the Report
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcRunError))]
pub enum RunError {
    /// The real input could not be loaded
    #[error("Input unavailable for {year} day {day:02} ({}): {source}", .path.display())]
    InputUnavailable {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: InputError,
    },

    /// Parsing or solving failed
    #[error("{year} day {day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_day::SolverError,
    },

    /// Multiple errors collected during the run
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcRunError>),
}

impl ArcRunError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcRunError, second: ArcRunError) -> ArcRunError {
        let errors = match (first.inner(), second.inner()) {
            (RunError::Multiple(v1), RunError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, RunError::Multiple(v)) => {
                let mut combined = vec![first.clone()];
                combined.extend(v.iter().cloned());
                combined
            }
            (RunError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second.clone());
                combined
            }
            _ => vec![first.clone(), second.clone()],
        };
        RunError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ArcRunError>, new: ArcRunError) -> ArcRunError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }

    /// Number of leaf errors this error stands for
    pub fn count(&self) -> usize {
        match self.inner() {
            RunError::Multiple(v) => v.iter().map(ArcRunError::count).sum(),
            _ => 1,
        }
    }
}

/// Input-loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file exists but holds nothing
    #[error("input file is empty")]
    Empty,
}
