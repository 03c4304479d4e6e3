use crate::utils::grid::Grid;
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

const EXAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "14"), Example::new(2, EXAMPLE, "34")];

const EMPTY: u8 = b'.';

type Position = (isize, isize);

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 8, tags = ["grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    /// Antenna positions grouped by frequency
    antennas: HashMap<u8, Vec<Position>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let antennas = grid
            .cells()
            .filter(|&(_, _, cell)| cell != EMPTY)
            .map(|(row, col, cell)| (cell, (row as isize, col as isize)))
            .into_group_map();
        Ok(SharedData { grid, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let antinodes: HashSet<Position> = antenna_pairs(&shared.antennas)
            .flat_map(|((r1, c1), (r2, c2))| {
                let (dr, dc) = (r2 - r1, c2 - c1);
                [(r1 - dr, c1 - dc), (r2 + dr, c2 + dc)]
            })
            .filter(|&(row, col)| grid.contains(row, col))
            .collect();
        Ok(antinodes.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let mut antinodes = HashSet::new();
        for ((r1, c1), (r2, c2)) in antenna_pairs(&shared.antennas) {
            let (dr, dc) = (r2 - r1, c2 - c1);
            for (sr, sc) in [(dr, dc), (-dr, -dc)] {
                let (mut row, mut col) = (r1, c1);
                while grid.contains(row, col) {
                    antinodes.insert((row, col));
                    row += sr;
                    col += sc;
                }
            }
        }
        Ok(antinodes.len().to_string())
    }
}

/// Every unordered pair of antennas sharing a frequency
fn antenna_pairs(antennas: &HashMap<u8, Vec<Position>>) -> impl Iterator<Item = (Position, Position)> + '_ {
    antennas
        .values()
        .flat_map(|positions| positions.iter().copied().tuple_combinations())
}
