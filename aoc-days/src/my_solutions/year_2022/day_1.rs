use anyhow::{Context, anyhow};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "1000
2000
3000

4000

5000
6000

7000
8000
9000

10000";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "24000"), Example::new(2, EXAMPLE, "45000")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 1, tags = ["grouping"])]
pub struct Solver;

impl AocParser for Solver {
    /// Total calories carried by each elf
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let totals = input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(elf, group)| -> Result<u64, anyhow::Error> {
                group
                    .lines()
                    .map(|line| line.trim().parse::<u64>().with_context(|| format!("bad calorie count `{line}`")))
                    .try_fold(0u64, |total, calories| -> Result<u64, anyhow::Error> {
                        total.checked_add(calories?).context("calorie total overflows u64")
                    })
                    .map_err(|e| anyhow!("(elf {}) {}", elf + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if totals.is_empty() {
            return Err(ParseError::MissingData("no elves in input".into()));
        }
        Ok(totals)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .copied()
            .k_largest(3)
            .try_fold(0u64, u64::checked_add)
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::SolveFailed("top three total overflows u64".into()))
    }
}
