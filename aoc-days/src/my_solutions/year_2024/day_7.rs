use anyhow::{Context, anyhow, ensure};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "3749"), Example::new(2, EXAMPLE, "11387")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 7, tags = ["recursion"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn from_line(line: &str) -> Result<Self, anyhow::Error> {
        let (target, operands) = line.split_once(':').ok_or_else(|| anyhow!("missing `:` in `{line}`"))?;
        let target = target.trim().parse().with_context(|| format!("bad target in `{line}`"))?;
        let operands = operands
            .split_whitespace()
            .map(|n| n.parse().with_context(|| format!("bad operand `{n}`")))
            .collect::<Result<Vec<u64>, _>>()?;
        ensure!(!operands.is_empty(), "no operands in `{line}`");
        Ok(Self { target, operands })
    }

    /// Whether some left-to-right choice of operators reaches the target
    fn is_solvable(&self, allow_concat: bool) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        reaches(self.target, first, rest, allow_concat)
    }
}

fn reaches(target: u64, acc: u64, rest: &[u64], allow_concat: bool) -> bool {
    let Some((&next, tail)) = rest.split_first() else {
        return acc == target;
    };
    // Operators never shrink the accumulator unless a zero is involved
    if acc > target && !rest.contains(&0) {
        return false;
    }

    let candidates = [
        acc.checked_add(next),
        acc.checked_mul(next),
        if allow_concat { concat(acc, next) } else { None },
    ];
    candidates
        .into_iter()
        .flatten()
        .any(|value| reaches(target, value, tail, allow_concat))
}

/// Decimal concatenation, `12 || 345 = 12345`
fn concat(left: u64, right: u64) -> Option<u64> {
    let shift = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
    left.checked_mul(shift)?.checked_add(right)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| Equation::from_line(line).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration(shared, false).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration(shared, true).map(|total| total.to_string())
    }
}

fn calibration(equations: &[Equation], allow_concat: bool) -> Result<u64, SolveError> {
    equations
        .iter()
        .filter(|eq| eq.is_solvable(allow_concat))
        .try_fold(0u64, |total, eq| total.checked_add(eq.target))
        .ok_or_else(|| SolveError::SolveFailed("calibration total overflows u64".into()))
}
