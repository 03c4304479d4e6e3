use crate::utils::grid::{ALL_DIRECTIONS, Grid};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "18"), Example::new(2, EXAMPLE, "9")];

const WORD: &[u8] = b"XMAS";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let count: usize = grid
            .cells()
            .filter(|&(_, _, cell)| cell == WORD[0])
            .map(|(row, col, _)| {
                ALL_DIRECTIONS
                    .iter()
                    .filter(|&&(dr, dc)| {
                        WORD.iter().enumerate().all(|(step, &letter)| {
                            let step = step as isize;
                            grid.get(row as isize + dr * step, col as isize + dc * step) == Some(letter)
                        })
                    })
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid = shared;
        let count = grid
            .cells()
            .filter(|&(row, col, cell)| cell == b'A' && is_mas_cross(grid, row as isize, col as isize))
            .count();
        Ok(count.to_string())
    }
}

/// Both diagonals through the `A` at (row, col) read `MAS` in either direction
fn is_mas_cross(grid: &Grid, row: isize, col: isize) -> bool {
    let diagonal = |dr: isize, dc: isize| {
        matches!(
            (grid.get(row - dr, col - dc), grid.get(row + dr, col + dc)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    diagonal(1, 1) && diagonal(1, -1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_examples, read_input};
    use aoc_day::SolverExt;

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_word_in_every_direction() {
        assert_eq!(Solver::solve_input("XMAS", 1).unwrap(), "1");
        assert_eq!(Solver::solve_input("SAMX", 1).unwrap(), "1");
        assert_eq!(Solver::solve_input("X\nM\nA\nS", 1).unwrap(), "1");
        assert_eq!(Solver::solve_input("X...\n.M..\n..A.\n...S", 1).unwrap(), "1");
    }

    #[test]
    fn test_cross_needs_both_diagonals() {
        assert_eq!(Solver::solve_input("M.S\n.A.\nM.S", 2).unwrap(), "1");
        assert_eq!(Solver::solve_input("M.M\n.A.\nS.S", 2).unwrap(), "1");
        assert_eq!(Solver::solve_input("M.S\n.A.\nS.M", 2).unwrap(), "0");
    }

    #[test]
    #[ignore = "requires puzzle input"]
    fn test_real_input() {
        let input = read_input(2024, 4);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "2297");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "1745");
    }
}
