use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

const EXAMPLE: &str = "R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2";

const LARGER_EXAMPLE: &str = "R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE, "13"),
    Example::new(2, EXAMPLE, "1"),
    Example::new(2, LARGER_EXAMPLE, "36"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 9, tags = ["simulation"])]
pub struct Solver;

/// One head motion: a unit step repeated `count` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    step: (i64, i64),
    count: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad motion `{line}`"));
                let (direction, count) = line.split_once(' ').ok_or_else(bad)?;
                let step = match direction {
                    "U" => (0, 1),
                    "D" => (0, -1),
                    "L" => (-1, 0),
                    "R" => (1, 0),
                    _ => return Err(bad()),
                };
                let count = count.parse().map_err(|_| bad())?;
                Ok(Motion { step, count })
            })
            .collect()
    }
}

/// Positions visited by the last of `knots` knots
fn tail_visits(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0i64, 0i64); knots];
    let mut visited = HashSet::from([(0, 0)]);
    for &Motion { step: (dx, dy), count } in motions {
        for _ in 0..count {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for idx in 1..knots {
                let (lead, knot) = (rope[idx - 1], &mut rope[idx]);
                let (gap_x, gap_y) = (lead.0 - knot.0, lead.1 - knot.1);
                if gap_x.abs() <= 1 && gap_y.abs() <= 1 {
                    break;
                }
                knot.0 += gap_x.signum();
                knot.1 += gap_y.signum();
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::check_examples;
    use aoc_day::{SolverError, SolverExt};

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_tail_follows_diagonally() {
        let motions = Solver::parse("U 1\nR 2").unwrap();
        // The tail stays put after the first step, then catches up to (1, 1)
        assert_eq!(tail_visits(&motions, 2), 2);
    }

    #[test]
    fn test_bad_motion() {
        assert!(matches!(
            Solver::solve_input("X 3", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
        assert!(Solver::solve_input("R -1", 1).is_err());
    }
}
