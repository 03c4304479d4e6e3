use crate::utils::grid::{Grid, ORTHOGONAL};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;
use std::ops::Deref;
use thiserror::Error;

const EXAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "41"), Example::new(2, EXAMPLE, "6")];

const GUARD: u8 = b'^';
const OBSTACLE: u8 = b'#';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

/// Reasons a patrol cannot finish by leaving the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatrolError {
    #[error("guard is stuck in a loop, turned twice the same way at obstacle ({row}, {col})")]
    LoopDetected { row: usize, col: usize },
}

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    start: (usize, usize),
    /// Cells visited by the unobstructed patrol, once known
    visited: Option<Vec<bool>>,
}

impl SharedData {
    fn visited(&mut self) -> Result<&[bool], PatrolError> {
        if self.visited.is_none() {
            self.visited = Some(patrol(&self.grid, self.start)?);
        }
        Ok(self.visited.as_deref().unwrap_or_default())
    }
}

/// An extra obstacle that is removed again when the guard is dropped
struct Obstruction<'g> {
    grid: &'g mut Grid,
    row: usize,
    col: usize,
    previous: u8,
}

impl<'g> Obstruction<'g> {
    fn place(grid: &'g mut Grid, row: usize, col: usize) -> Self {
        let previous = grid.replace(row, col, OBSTACLE);
        Self {
            grid,
            row,
            col,
            previous,
        }
    }
}

impl Deref for Obstruction<'_> {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        self.grid
    }
}

impl Drop for Obstruction<'_> {
    fn drop(&mut self) {
        self.grid.replace(self.row, self.col, self.previous);
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find(GUARD)
            .ok_or_else(|| ParseError::MissingData("no guard `^` on the map".into()))?;
        Ok(SharedData {
            grid,
            start,
            visited: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visited = shared.visited().map_err(SolveError::failed)?;
        Ok(visited.iter().filter(|&&v| v).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let candidates: Vec<(usize, usize)> = {
            let cols = shared.grid.cols();
            let start = shared.start;
            shared
                .visited()
                .map_err(SolveError::failed)?
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v)
                .map(|(idx, _)| (idx / cols, idx % cols))
                .filter(|&cell| cell != start)
                .collect()
        };

        let mut loops = 0;
        for (row, col) in candidates {
            let obstructed = Obstruction::place(&mut shared.grid, row, col);
            match patrol(&obstructed, shared.start) {
                Ok(_) => {}
                Err(PatrolError::LoopDetected { .. }) => loops += 1,
            }
        }
        Ok(loops.to_string())
    }
}

/// Walk the guard until it leaves the map, returning the visited cells in row-major order
fn patrol(grid: &Grid, start: (usize, usize)) -> Result<Vec<bool>, PatrolError> {
    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut turns = HashSet::new();
    let (mut row, mut col) = (start.0 as isize, start.1 as isize);
    let mut heading = 0;
    visited[start.0 * grid.cols() + start.1] = true;

    loop {
        let (dr, dc) = ORTHOGONAL[heading];
        let (next_row, next_col) = (row + dr, col + dc);
        match grid.get(next_row, next_col) {
            None => return Ok(visited),
            Some(OBSTACLE) => {
                heading = (heading + 1) % ORTHOGONAL.len();
                if !turns.insert((next_row, next_col, heading)) {
                    return Err(PatrolError::LoopDetected {
                        row: next_row as usize,
                        col: next_col as usize,
                    });
                }
            }
            Some(_) => {
                (row, col) = (next_row, next_col);
                visited[row as usize * grid.cols() + col as usize] = true;
            }
        }
    }
}
