//! Day Module library
//!
//! A small framework for daily puzzle solvers. Each puzzle is a Day Module:
//! it parses its textual input once and produces a textual answer per part.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining Day Modules ([`AocParser`], [`PartSolver`], [`Solver`])
//! - Bundled example fixtures ([`Example`]) and an optional bundled real input
//! - Timed, type-erased instances ([`DynSolver`])
//! - A registry ordered by year and day, fed by an `inventory` plugin system
//!
//! # Quick Example
//!
//! ```
//! use aoc_day::{AocParser, AocSolver, Example, ParseError, PartSolver, SolveError, SolverExt};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2, examples = EXAMPLES)]
//! struct Sums;
//!
//! const EXAMPLES: &[Example] = &[Example::new(1, "1\n2\n3", "6"), Example::new(2, "1\n2\n3", "6")];
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! assert_eq!(Sums::solve_input("1\n2\n3", 1).unwrap(), "6");
//! ```
//!
//! # Plugin System
//!
//! Use `#[derive(AutoRegisterSolver)]` to register a Day Module automatically:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 4, tags = ["grid"])]
//! pub struct Solver;
//! ```

// Lets the derive macros refer to `::aoc_day` from inside this crate's tests.
extern crate self as aoc_day;

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, Example, NOT_APPLICABLE, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_day_macros::{AocSolver, AutoRegisterSolver};
