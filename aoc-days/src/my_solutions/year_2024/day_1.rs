use anyhow::{Context, anyhow};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "11"), Example::new(2, EXAMPLE, "31")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 1, tags = ["lists"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut left, mut right): (Vec<u64>, Vec<u64>) = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| -> Result<(u64, u64), anyhow::Error> {
                let (l, r) = line
                    .split_whitespace()
                    .collect_tuple()
                    .ok_or_else(|| anyhow!("(line {}) expected two columns", idx + 1))?;
                Ok((
                    l.parse().with_context(|| format!("(line {}) bad number `{l}`", idx + 1))?,
                    r.parse().with_context(|| format!("(line {}) bad number `{r}`", idx + 1))?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?
            .into_iter()
            .unzip();

        left.sort_unstable();
        right.sort_unstable();
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .left
            .iter()
            .zip(&shared.right)
            .try_fold(0u64, |sum, (l, r)| sum.checked_add(l.abs_diff(*r)))
            .map(|distance| distance.to_string())
            .ok_or_else(|| SolveError::SolveFailed("total distance overflows u64".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.right.iter().counts();
        shared
            .left
            .iter()
            .try_fold(0u64, |sum, l| {
                let count = counts.get(l).copied().unwrap_or(0) as u64;
                sum.checked_add(l.checked_mul(count)?)
            })
            .map(|similarity| similarity.to_string())
            .ok_or_else(|| SolveError::SolveFailed("similarity score overflows u64".into()))
    }
}
