//! Timed, type-erased Day Module instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// An answer together with when its computation started and finished
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl SolveResult {
    /// Wall-clock time spent computing the answer
    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, DateTime<Utc>, DateTime<Utc>) {
    let started = Utc::now();
    let value = f();
    (value, started, Utc::now())
}

/// Input of one Day Module, parsed once and shared by all of its parts
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parse: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input`, recording how long the parse took
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, started, finished) = timed(|| S::parse(input));
        Ok(Self {
            shared: shared?,
            parse: finished - started,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], whatever its Day Module
///
/// # Example
///
/// ```no_run
/// use aoc_day::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), aoc_day::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} ({})", result.answer, result.duration());
///     }
///     println!("parse: {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing the computation
    ///
    /// Parts outside `1..=parts()` fail with [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Time spent parsing the input
    fn parse_duration(&self) -> TimeDelta;

    /// Number of parts the Day Module implements
    fn parts(&self) -> u8;
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, started, finished) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            started,
            finished,
        })
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input)
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
            Ok(shared.repeat(2))
        }
    }

    #[test]
    fn test_solve_records_timing() {
        let mut instance = SolverInstance::<Doubler>::new("ab").unwrap();
        assert_eq!(instance.parts(), 1);
        assert!(instance.parse_duration() >= TimeDelta::zero());

        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "abab");
        assert!(result.finished >= result.started);
        assert_eq!(result.duration(), result.finished - result.started);
    }

    #[test]
    fn test_out_of_range_part_rejected() {
        let mut instance = SolverInstance::<Doubler>::new("ab").unwrap();
        assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_parse_error_propagates() {
        let result = SolverInstance::<Doubler>::new("");
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }
}
