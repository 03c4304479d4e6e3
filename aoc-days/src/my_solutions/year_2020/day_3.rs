use crate::utils::grid::Grid;
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "7"), Example::new(2, EXAMPLE, "336")];

/// `(right, down)` slopes checked in part 2
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2020, day = 3, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    /// The slope pattern; it repeats to the right forever
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((row, col, cell)) = grid.cells().find(|&(_, _, cell)| cell != b'.' && cell != b'#') {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected `{}` at row {}, column {}",
                cell as char,
                row + 1,
                col + 1
            )));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees_hit(shared, 3, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        SLOPES
            .iter()
            .try_fold(1u64, |product, &(right, down)| product.checked_mul(trees_hit(shared, right, down)))
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::SolveFailed("product of tree counts overflows u64".into()))
    }
}

/// Trees on the way from the top-left corner to the bottom row
fn trees_hit(grid: &Grid, right: usize, down: usize) -> u64 {
    (0..grid.rows())
        .step_by(down)
        .enumerate()
        .filter(|&(step, row)| {
            let col = (step * right) % grid.cols();
            grid.get(row as isize, col as isize) == Some(b'#')
        })
        .count() as u64
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
    fn test_each_slope() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        let counts: Vec<u64> = SLOPES.iter().map(|&(r, d)| trees_hit(&grid, r, d)).collect();
        assert_eq!(counts, vec![2, 7, 3, 4, 2]);
    }

    #[test]
    fn test_pattern_repeats_to_the_right() {
        // Column 3 of the second row wraps back to column 0
        assert_eq!(Solver::solve_input("...\n#..", 1).unwrap(), "1");
    }

    #[test]
    fn test_unknown_cell() {
        assert!(matches!(
            Solver::solve_input("..#\n.x.", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_real_input() {
        let input = read_input(2020, 3);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "284");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "3510149120");
    }
}
