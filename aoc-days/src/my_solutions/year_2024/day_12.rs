use crate::utils::grid::{Grid, ORTHOGONAL};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

const SMALL: &str = "AAAA
BBCD
BBCC
EEEC";

const ENCLAVES: &str = "OOOOO
OXOXO
OOOOO
OXOXO
OOOOO";

const LARGE: &str = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

const E_SHAPE: &str = "EEEEE
EXXXX
EEEEE
EXXXX
EEEEE";

const DIAGONAL_TOUCH: &str = "AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA";

const EXAMPLES: &[Example] = &[
    Example::new(1, SMALL, "140"),
    Example::new(1, ENCLAVES, "772"),
    Example::new(1, LARGE, "1930"),
    Example::new(2, SMALL, "80"),
    Example::new(2, ENCLAVES, "436"),
    Example::new(2, E_SHAPE, "236"),
    Example::new(2, DIAGONAL_TOUCH, "368"),
    Example::new(2, LARGE, "1206"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    plant: u8,
    area: u64,
    perimeter: u64,
    /// Straight fence sections, equal to the number of corners
    sides: u64,
}

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    regions: Option<Vec<Region>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            grid: Grid::parse(input)?,
            regions: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}

fn regions(shared: &mut SharedData) -> &[Region] {
    let grid = &shared.grid;
    shared.regions.get_or_insert_with(|| {
        let regions = find_regions(grid);
        log::debug!("found {} regions on a {}x{} map", regions.len(), grid.rows(), grid.cols());
        regions
    })
}

fn find_regions(grid: &Grid) -> Vec<Region> {
    let mut seen = vec![false; grid.rows() * grid.cols()];
    let mut regions = Vec::new();

    for (row, col, plant) in grid.cells() {
        if seen[row * grid.cols() + col] {
            continue;
        }
        seen[row * grid.cols() + col] = true;

        let mut region = Region {
            plant,
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        let mut queue = VecDeque::from([(row as isize, col as isize)]);
        while let Some((r, c)) = queue.pop_front() {
            region.area += 1;
            region.sides += corners(grid, r, c, plant);
            for (dr, dc) in ORTHOGONAL {
                let (nr, nc) = (r + dr, c + dc);
                if grid.get(nr, nc) != Some(plant) {
                    region.perimeter += 1;
                    continue;
                }
                let idx = nr as usize * grid.cols() + nc as usize;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
        regions.push(region);
    }
    regions
}

/// Convex and concave corners of the region at (row, col)
fn corners(grid: &Grid, row: isize, col: isize, plant: u8) -> u64 {
    let same = |dr: isize, dc: isize| grid.get(row + dr, col + dc) == Some(plant);
    (0..ORTHOGONAL.len())
        .filter(|&i| {
            let (ar, ac) = ORTHOGONAL[i];
            let (br, bc) = ORTHOGONAL[(i + 1) % ORTHOGONAL.len()];
            let (a, b) = (same(ar, ac), same(br, bc));
            (!a && !b) || (a && b && !same(ar + br, ac + bc))
        })
        .count() as u64
}
