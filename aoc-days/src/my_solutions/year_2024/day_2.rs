use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "2"), Example::new(2, EXAMPLE, "4")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 2, tags = ["lists"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|level| {
                        level
                            .parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad level `{level}` in `{line}`")))
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|report| is_safe(report.iter().copied())).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| {
                is_safe(report.iter().copied())
                    || (0..report.len()).any(|skip| {
                        is_safe(
                            report
                                .iter()
                                .enumerate()
                                .filter(|&(idx, _)| idx != skip)
                                .map(|(_, &level)| level),
                        )
                    })
            })
            .count();
        Ok(safe.to_string())
    }
}

/// Strictly monotonic with every step between 1 and 3
fn is_safe(levels: impl Iterator<Item = i64>) -> bool {
    let steps: Vec<i64> = levels.tuple_windows().map(|(a, b)| b - a).collect();
    steps.iter().all(|s| (1..=3).contains(s)) || steps.iter().all(|s| (-3..=-1).contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::check_examples;
    use aoc_day::SolverExt;

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_safety_rules() {
        assert!(is_safe([1, 2, 5].into_iter()));
        assert!(is_safe([9, 6, 5].into_iter()));
        assert!(!is_safe([1, 5].into_iter()));
        assert!(!is_safe([1, 1].into_iter()));
        assert!(!is_safe([1, 2, 1].into_iter()));
    }

    #[test]
    fn test_dampener_removes_first_level() {
        assert_eq!(Solver::solve_input("9 1 2 3", 1).unwrap(), "0");
        assert_eq!(Solver::solve_input("9 1 2 3", 2).unwrap(), "1");
    }
}
