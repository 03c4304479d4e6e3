//! Errors raised while registering, parsing and solving Day Modules

use thiserror::Error;

/// Puzzle text that does not match the Day Module's grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs is absent, such as the guard on a map
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Failure of a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// Part lies within `1..=PARTS` but has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part lies outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Module specific failure, such as a detected loop
    ///
    /// The concrete error can be recovered with `downcast_ref`.
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    pub fn failed<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::SolveFailed(Box::new(error))
    }
}

/// Anything that can go wrong between a year/day and an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No Day Module registered for {0} day {1:02}")]
    NotFound(u16, u8),
    #[error("{0} day {1:02} is outside the supported range")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Rejected registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{0} day {1:02} is already registered")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register {0} day {1:02}: out of range")]
    InvalidYearDay(u16, u8),
}
