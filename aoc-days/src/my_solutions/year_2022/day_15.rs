use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;
use std::collections::HashSet;

const EXAMPLE: &str = "Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "26"), Example::new(2, EXAMPLE, "56000011")];

/// Inputs whose coordinates all stay below this use the small example geometry
const SMALL_COORDINATES: i64 = 1_000;
const FREQUENCY_FACTOR: i64 = 4_000_000;
/// Keeps every distance sum well inside i64
const MAX_COORDINATE: i64 = 1 << 40;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 15, tags = ["geometry", "ranges"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    x: i64,
    y: i64,
    beacon: (i64, i64),
    /// Manhattan distance to the closest beacon
    radius: i64,
}

impl Sensor {
    fn covers(&self, x: i64, y: i64) -> bool {
        (self.x - x).abs() + (self.y - y).abs() <= self.radius
    }
}

#[derive(Debug, Clone)]
pub struct SharedData {
    sensors: Vec<Sensor>,
    /// Row counted in part 1
    row: i64,
    /// Largest coordinate the distress beacon may have
    bound: i64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^Sensor at x=(-?\d+), y=(-?\d+): closest beacon is at x=(-?\d+), y=(-?\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let sensors = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad sensor report `{line}`"));
                let caps = re.captures(line).ok_or_else(bad)?;
                let coord = |idx: usize| caps[idx].parse::<i64>().ok().filter(|c| c.abs() <= MAX_COORDINATE).ok_or_else(bad);
                let (x, y, bx, by) = (coord(1)?, coord(2)?, coord(3)?, coord(4)?);
                Ok(Sensor { x, y, beacon: (bx, by), radius: (x - bx).abs() + (y - by).abs() })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        if sensors.is_empty() {
            return Err(ParseError::MissingData("no sensor reports".into()));
        }

        let small = sensors
            .iter()
            .flat_map(|s| [s.x, s.y, s.beacon.0, s.beacon.1])
            .all(|c| c.abs() < SMALL_COORDINATES);
        let (row, bound) = if small { (10, 20) } else { (2_000_000, 4_000_000) };
        Ok(SharedData { sensors, row, bound })
    }
}

/// Merged column ranges, inclusive, that the sensors cover on `row`
fn covered_on_row(sensors: &[Sensor], row: i64) -> Vec<(i64, i64)> {
    let mut merged: Vec<(i64, i64)> = Vec::new();
    let spans = sensors
        .iter()
        .filter_map(|s| {
            let reach = s.radius - (s.y - row).abs();
            (reach >= 0).then_some((s.x - reach, s.x + reach))
        })
        .sorted_unstable();
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

impl PartSolver<1> for Solver {
    /// Positions on the row that cannot hold a beacon
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let covered = covered_on_row(&shared.sensors, shared.row);
        let beacons = shared
            .sensors
            .iter()
            .map(|s| s.beacon)
            .filter(|&(x, y)| y == shared.row && covered.iter().any(|&(start, end)| (start..=end).contains(&x)))
            .collect::<HashSet<_>>()
            .len() as i64;
        let total: i64 = covered.iter().map(|(start, end)| end - start + 1).sum();
        Ok((total - beacons).to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Tuning frequency of the only uncovered position within the bounds
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sensors = &shared.sensors;
        let bound = shared.bound;

        // The gap sits just outside two sensor borders, where a rising edge crosses a falling one
        let rising = sensors.iter().flat_map(|s| [s.y - s.x - s.radius - 1, s.y - s.x + s.radius + 1]);
        let falling = sensors
            .iter()
            .flat_map(|s| [s.x + s.y - s.radius - 1, s.x + s.y + s.radius + 1])
            .collect::<HashSet<_>>();
        let crossings = rising
            .collect::<HashSet<_>>()
            .into_iter()
            .cartesian_product(falling.iter().copied())
            .filter(|(a, b)| (b - a) % 2 == 0)
            .map(|(a, b)| ((b - a) / 2, (a + b) / 2));
        let corners = [(0, 0), (0, bound), (bound, 0), (bound, bound)];

        let (x, y) = corners
            .into_iter()
            .chain(crossings)
            .find(|&(x, y)| {
                (0..=bound).contains(&x) && (0..=bound).contains(&y) && !sensors.iter().any(|s| s.covers(x, y))
            })
            .ok_or_else(|| SolveError::SolveFailed(format!("every position up to {bound} is covered").into()))?;

        x.checked_mul(FREQUENCY_FACTOR)
            .and_then(|f| f.checked_add(y))
            .map(|frequency| frequency.to_string())
            .ok_or_else(|| SolveError::SolveFailed("tuning frequency overflows i64".into()))
    }
}
