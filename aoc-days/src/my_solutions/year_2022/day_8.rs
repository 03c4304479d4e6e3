use crate::utils::grid::{Grid, ORTHOGONAL};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "30373
25512
65332
33549
35390";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "21"), Example::new(2, EXAMPLE, "8")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

/// Trees passed looking from a tree in one direction, and whether the view reaches the edge
fn look(grid: &Grid, row: usize, col: usize, (dr, dc): (isize, isize)) -> (u64, bool) {
    let Some(height) = grid.get(row as isize, col as isize) else {
        return (0, true);
    };
    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
    let mut seen = 0;
    while let Some(other) = grid.get(r, c) {
        seen += 1;
        if other >= height {
            return (seen, false);
        }
        r += dr;
        c += dc;
    }
    (seen, true)
}

impl AocParser for Solver {
    /// Tree heights as ASCII digits
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((row, col, _)) = grid.cells().find(|(_, _, cell)| !cell.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(format!(
                "tree at row {}, column {} has no height",
                row + 1,
                col + 1
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    /// Trees visible from outside the grid
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visible = shared
            .cells()
            .filter(|&(row, col, _)| ORTHOGONAL.iter().any(|&step| look(shared, row, col, step).1))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Highest scenic score
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .cells()
            .map(|(row, col, _)| ORTHOGONAL.iter().map(|&step| look(shared, row, col, step).0).product::<u64>())
            .max()
            .unwrap_or_default();
        Ok(best.to_string())
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
    fn test_view_stops_at_equal_height() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        // The 5 in the fourth row
        assert_eq!(look(&grid, 3, 2, (-1, 0)), (2, false));
        assert_eq!(look(&grid, 3, 2, (0, -1)), (2, true));
        assert_eq!(look(&grid, 3, 2, (1, 0)), (1, true));
        assert_eq!(look(&grid, 3, 2, (0, 1)), (2, false));
    }

    #[test]
    fn test_single_tree() {
        assert_eq!(Solver::solve_input("7", 1).unwrap(), "1");
        assert_eq!(Solver::solve_input("7", 2).unwrap(), "0");
    }

    #[test]
    fn test_non_digit_rejected() {
        assert!(matches!(
            Solver::solve_input("12\n3x", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }
}
