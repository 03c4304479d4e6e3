use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

const EXAMPLE: &str = "    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "CMZ"), Example::new(2, EXAMPLE, "MCD")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 5, tags = ["simulation", "stacks"])]
pub struct Solver;

/// Move `count` crates from stack `from` to stack `to`, both 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct SharedData {
    /// Crates of each stack, bottom first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

impl SharedData {
    /// Crates on top once every move has run; empty stacks are skipped
    fn rearrange(&self, keep_order: bool) -> Result<String, SolveError> {
        let mut stacks = self.stacks.clone();
        for (idx, &Move { count, from, to }) in self.moves.iter().enumerate() {
            let height = stacks[from].len();
            if count > height {
                return Err(SolveError::SolveFailed(
                    format!("move {} takes {count} crates from a stack of {height}", idx + 1).into(),
                ));
            }
            let mut lifted = stacks[from].split_off(height - count);
            if !keep_order {
                lifted.reverse();
            }
            stacks[to].append(&mut lifted);
        }
        Ok(stacks.iter().filter_map(|stack| stack.last()).map(|&c| c as char).collect())
    }
}

fn parse_drawing(drawing: &str) -> Result<Vec<Vec<u8>>, ParseError> {
    let mut rows = drawing.lines().rev();
    let labels = rows
        .next()
        .ok_or_else(|| ParseError::MissingData("empty stack drawing".into()))?;
    let count = labels.split_whitespace().count();
    if count == 0 {
        return Err(ParseError::InvalidFormat("stack drawing has no numbered stacks".into()));
    }

    let mut stacks = vec![Vec::new(); count];
    for row in rows {
        // Crate letters sit at columns 1, 5, 9, ...
        for (idx, &cell) in row.as_bytes().iter().skip(1).step_by(4).enumerate() {
            match cell {
                b'A'..=b'Z' if idx < count => stacks[idx].push(cell),
                b' ' => {}
                _ => {
                    return Err(ParseError::InvalidFormat(format!("unexpected crate in row `{row}`")));
                }
            }
        }
    }
    Ok(stacks)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (drawing, procedure) = input
            .trim_end()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected a drawing and moves separated by a blank line".into()))?;
        let stacks = parse_drawing(drawing.trim_start_matches('\n'))?;

        let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").map_err(|e| ParseError::Other(e.to_string()))?;
        let moves = procedure
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad move `{line}`"));
                let caps = re.captures(line).ok_or_else(bad)?;
                let stack = |idx: usize| {
                    caps[idx]
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .filter(|&n| n < stacks.len())
                        .ok_or_else(bad)
                };
                Ok(Move {
                    count: caps[1].parse().map_err(|_| bad())?,
                    from: stack(2)?,
                    to: stack(3)?,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(SharedData { stacks, moves })
    }
}

impl PartSolver<1> for Solver {
    /// The crane lifts one crate at a time
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(false)
    }
}

impl PartSolver<2> for Solver {
    /// The crane lifts several crates at once
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.rearrange(true)
    }
}
