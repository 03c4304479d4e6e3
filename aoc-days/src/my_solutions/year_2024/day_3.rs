use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

const EXAMPLES: &[Example] = &[
    Example::new(
        1,
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))",
        "161",
    ),
    Example::new(
        2,
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
        "48",
    ),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    /// Instructions in the order they appear in the corrupted memory
    type SharedData<'a> = Vec<Op>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").map_err(|e| ParseError::Other(e.to_string()))?;
        re.captures_iter(input)
            .map(|caps| -> Result<Op, ParseError> {
                let operand = |m: regex::Match<'_>| {
                    m.as_str()
                        .parse::<u64>()
                        .map_err(|_| ParseError::InvalidFormat(format!("operand `{}` out of range", m.as_str())))
                };
                match (caps.get(1), caps.get(2)) {
                    (Some(a), Some(b)) => Ok(Op::Mul(operand(a)?, operand(b)?)),
                    _ if &caps[0] == "do()" => Ok(Op::Do),
                    _ => Ok(Op::Dont),
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.iter().any(|op| matches!(op, Op::Mul(..))) {
            log::warn!("no mul instructions found");
            return Ok("0".to_string());
        }
        shared
            .iter()
            .try_fold(0u64, |sum, op| match op {
                Op::Mul(a, b) => add_product(sum, *a, *b),
                _ => Ok(sum),
            })
            .map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            log::warn!("no mul, do or don't instructions found");
            return Ok("0".to_string());
        }
        let (sum, _) = shared
            .iter()
            .try_fold((0u64, true), |(sum, enabled), op| -> Result<_, SolveError> {
                match op {
                    Op::Do => Ok((sum, true)),
                    Op::Dont => Ok((sum, false)),
                    Op::Mul(a, b) if enabled => Ok((add_product(sum, *a, *b)?, enabled)),
                    Op::Mul(..) => Ok((sum, enabled)),
                }
            })?;
        Ok(sum.to_string())
    }
}

/// `sum + a * b`, failing instead of wrapping
fn add_product(sum: u64, a: u64, b: u64) -> Result<u64, SolveError> {
    a.checked_mul(b)
        .and_then(|product| sum.checked_add(product))
        .ok_or_else(|| SolveError::SolveFailed(format!("mul({a},{b}) overflows the running sum").into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_examples, read_input};
    use aoc_day::{SolverError, SolverExt};

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_scan_order() {
        let ops = Solver::parse("don't()mul(1,2)do()xmul(3,4]mul(5,6)").unwrap();
        assert_eq!(ops, vec![Op::Dont, Op::Mul(1, 2), Op::Do, Op::Mul(5, 6)]);
    }

    #[test]
    fn test_empty_scan_is_zero() {
        assert_eq!(Solver::solve_input("nothing to see", 1).unwrap(), "0");
        assert_eq!(Solver::solve_input("nothing to see", 2).unwrap(), "0");
        assert_eq!(Solver::solve_input("do()", 1).unwrap(), "0");
    }

    #[test]
    fn test_disabled_until_reenabled() {
        assert_eq!(Solver::solve_input("don't()mul(2,3)do()mul(4,5)", 2).unwrap(), "20");
    }

    #[test]
    fn test_overflow_is_an_error() {
        for part in [1, 2] {
            assert!(matches!(
                Solver::solve_input("mul(99999999999,99999999999)", part),
                Err(SolverError::SolveError(SolveError::SolveFailed(_)))
            ));
        }
        let near_max = format!("mul({},1)mul(1,1)", u64::MAX);
        assert!(Solver::solve_input(&near_max, 1).is_err());
        assert!(Solver::solve_input(&format!("don't(){near_max}"), 2).is_ok());
    }

    #[test]
    #[ignore = "requires puzzle input"]
    fn test_real_input() {
        let input = read_input(2024, 3);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "179571322");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "103811193");
    }
}
