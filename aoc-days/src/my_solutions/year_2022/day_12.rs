use crate::utils::grid::{Grid, ORTHOGONAL};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

const EXAMPLE: &str = "Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "31"), Example::new(2, EXAMPLE, "29")];

const START: u8 = b'S';
const END: u8 = b'E';

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 12, tags = ["grid", "graph"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct SharedData {
    /// Elevations `a`-`z`, with the start and end markers replaced
    heights: Grid,
    start: (usize, usize),
    /// Fewest steps from each cell to the end, `None` where it cannot be reached
    steps: Vec<Option<u32>>,
}

impl SharedData {
    fn steps_from(&self, row: usize, col: usize) -> Option<u32> {
        self.steps[row * self.heights.cols() + col]
    }
}

/// Walk backwards from the end, where a step down may drop any distance but a step up only one
fn steps_to_end(heights: &Grid, end: (usize, usize)) -> Vec<Option<u32>> {
    let cols = heights.cols();
    let mut steps = vec![None; heights.rows() * cols];
    steps[end.0 * cols + end.1] = Some(0);
    let mut queue = VecDeque::from([(end.0 as isize, end.1 as isize, 0u32)]);

    while let Some((row, col, taken)) = queue.pop_front() {
        let Some(here) = heights.get(row, col) else {
            continue;
        };
        for (dr, dc) in ORTHOGONAL {
            let (r, c) = (row + dr, col + dc);
            let Some(there) = heights.get(r, c) else {
                continue;
            };
            let slot = &mut steps[r as usize * cols + c as usize];
            if slot.is_none() && here <= there + 1 {
                *slot = Some(taken + 1);
                queue.push_back((r, c, taken + 1));
            }
        }
    }
    steps
}

/// Position of the single `marker`, which is overwritten with `height`
fn take_marker(grid: &mut Grid, marker: u8, height: u8) -> Result<(usize, usize), ParseError> {
    let (row, col) = grid
        .find(marker)
        .ok_or_else(|| ParseError::MissingData(format!("no `{}` on the map", marker as char)))?;
    grid.replace(row, col, height);
    if grid.find(marker).is_some() {
        return Err(ParseError::InvalidFormat(format!("more than one `{}`", marker as char)));
    }
    Ok((row, col))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut heights = Grid::parse(input)?;
        let start = take_marker(&mut heights, START, b'a')?;
        let end = take_marker(&mut heights, END, b'z')?;

        if let Some((row, col, cell)) = heights.cells().find(|(_, _, cell)| !cell.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected `{}` at row {}, column {}",
                cell as char,
                row + 1,
                col + 1
            )));
        }

        let steps = steps_to_end(&heights, end);
        Ok(SharedData { heights, start, steps })
    }
}

impl PartSolver<1> for Solver {
    /// Fewest steps from the marked start
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (row, col) = shared.start;
        shared
            .steps_from(row, col)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed("the end cannot be reached from the start".into()))
    }
}

impl PartSolver<2> for Solver {
    /// Fewest steps from any square at elevation `a`
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .heights
            .cells()
            .filter(|&(_, _, height)| height == b'a')
            .filter_map(|(row, col, _)| shared.steps_from(row, col))
            .min()
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no lowest square reaches the end".into()))
    }
}
