use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLES: &[Example] = &[
    Example::new(1, "mjqjpqmgbljsphdztnvjfqwrcgsmlb", "7"),
    Example::new(1, "bvwbjplbgvbhsrlpgdmjqwftvncz", "5"),
    Example::new(1, "zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", "11"),
    Example::new(2, "mjqjpqmgbljsphdztnvjfqwrcgsmlb", "19"),
    Example::new(2, "nppdvjthqldpwncqszvftbrmjlhg", "23"),
    Example::new(2, "nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", "29"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 6, tags = ["sliding-window"])]
pub struct Solver;

impl AocParser for Solver {
    /// The datastream buffer
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.trim();
        if stream.is_empty() {
            return Err(ParseError::MissingData("empty datastream".into()));
        }
        Ok(stream.as_bytes())
    }
}

/// Characters read once the first `size` distinct characters in a row have arrived
fn marker_end(stream: &[u8], size: usize) -> Result<usize, SolveError> {
    stream
        .windows(size)
        .position(|window| window.iter().all_unique())
        .map(|start| start + size)
        .ok_or_else(|| SolveError::SolveFailed(format!("no run of {size} distinct characters").into()))
}

impl PartSolver<1> for Solver {
    /// Start-of-packet marker
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 4).map(|end| end.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Start-of-message marker
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        marker_end(shared, 14).map(|end| end.to_string())
    }
}
