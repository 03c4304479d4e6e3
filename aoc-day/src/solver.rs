//! The Day Module contract: parse once, then solve each part

use crate::error::{ParseError, SolveError, SolverError};

/// Answer of a part that has no puzzle behind it
///
/// A valid answer, not an error.
pub const NOT_APPLICABLE: &str = "N/A";

/// Example input bundled with a Day Module, with the answer it must give
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub part: u8,
    pub input: &'static str,
    pub expected: &'static str,
}

impl Example {
    pub const fn new(part: u8, input: &'static str, expected: &'static str) -> Self {
        Self {
            part,
            input,
            expected,
        }
    }
}

/// Turns puzzle text into the data every part works from
///
/// # Example
///
/// ```
/// use aoc_day::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(format!("not a depth: {n}"))))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("199 200\n208").unwrap(), vec![199, 200, 208]);
/// assert!(Depths::parse("deep").is_err());
/// ```
pub trait AocParser {
    /// Parsed input plus whatever the parts want to cache between them
    ///
    /// Owned data (`Vec<T>`, a struct) or a borrow of the input (`&'a str`)
    /// both work; parts receive it mutably.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a Day Module
///
/// # Example
///
/// ```
/// use aoc_day::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
///             .collect()
///     }
/// }
///
/// // Number of increases
/// impl PartSolver<1> for Depths {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = Depths::parse("199 200 208 200").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut depths).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete Day Module
///
/// Usually derived with `#[derive(AocSolver)]`, which forwards
/// `solve_part(shared, n)` to `PartSolver<n>`. Implemented by hand it reads:
///
/// ```
/// use aoc_day::{AocParser, Example, ParseError, SolveError, Solver, SolverExt};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///     const EXAMPLES: &'static [Example] = &[Example::new(2, "1 2 3", "3")];
///
///     fn solve_part(depths: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(depths.iter().min().copied().unwrap_or_default().to_string()),
///             2 => Ok(depths.iter().max().copied().unwrap_or_default().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// assert_eq!(Depths::solve_input("4 1 7", 1).unwrap(), "1");
/// ```
pub trait Solver: AocParser {
    /// Number of parts; parts are numbered `1..=PARTS`
    const PARTS: u8;

    const EXAMPLES: &'static [Example] = &[];

    /// Real input embedded in the module, when it is short enough
    const INPUT: Option<&'static str> = None;

    /// Solve `part`; callers go through [`SolverExt::solve_part_checked_range`]
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Helpers shared by every [`Solver`]
pub trait SolverExt: Solver {
    /// [`Solver::solve_part`] guarded against parts outside `1..=PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if !(1..=Self::PARTS).contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }

    /// Parse `input` and solve `part` from scratch
    ///
    /// Nothing carries over between calls: the same input always gives
    /// the same answer.
    fn solve_input(input: &str, part: u8) -> Result<String, SolverError> {
        let mut shared = Self::parse(input)?;
        Ok(Self::solve_part_checked_range(&mut shared, part)?)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
