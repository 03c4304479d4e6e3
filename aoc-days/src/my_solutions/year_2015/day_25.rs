use aoc_day::{AocParser, Example, NOT_APPLICABLE, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

const INPUT: &str = "To continue, please consult the code grid in the manual.  Enter the code at row 2947, column 3029.";

const EXAMPLES: &[Example] = &[
    Example::new(1, "row 4, column 4", "9380097"),
    Example::new(1, "row 1, column 1", "20151125"),
    Example::new(2, "row 4, column 4", NOT_APPLICABLE),
];

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES, input = INPUT)]
#[aoc(year = 2015, day = 25, tags = ["math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    row: u64,
    col: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Position;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"row (\d+), column (\d+)").map_err(|e| ParseError::Other(e.to_string()))?;
        let caps = re
            .captures(input)
            .ok_or_else(|| ParseError::MissingData("expected `row R, column C`".into()))?;

        let number = |idx: usize| -> Result<u64, ParseError> {
            caps[idx]
                .parse::<u64>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ParseError::InvalidFormat(format!("invalid grid coordinate `{}`", &caps[idx])))
        };

        Ok(Position {
            row: number(1)?,
            col: number(2)?,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Position { row, col } = *shared;
        code_at(row, col)
            .map(|code| code.to_string())
            .ok_or_else(|| SolveError::SolveFailed(format!("row {row}, column {col} is too far into the grid").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(NOT_APPLICABLE.to_string())
    }
}

/// Code at a 1-based grid position; codes fill diagonals bottom-left to top-right
///
/// `None` when the position's index in the fill order does not fit a `u64`.
fn code_at(row: u64, col: u64) -> Option<u64> {
    let diagonal = row.checked_add(col)? - 1;
    let index = (diagonal.checked_mul(diagonal - 1)? / 2).checked_add(col)?;
    Some(FIRST_CODE * mod_pow(MULTIPLIER, index - 1, MODULUS) % MODULUS)
}

fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}
