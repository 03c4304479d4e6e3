use anyhow::{Context, anyhow, bail};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop";

const EXAMPLE_PICTURE: &str = "##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "13140"), Example::new(2, EXAMPLE, EXAMPLE_PICTURE)];

const SAMPLE_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];
const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 10, tags = ["simulation", "ascii-art"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Noop,
    AddX(i64),
}

impl Instruction {
    fn from_line(line: &str) -> Result<Self, anyhow::Error> {
        match line.split_once(' ') {
            None if line == "noop" => Ok(Instruction::Noop),
            Some(("addx", value)) => value
                .trim()
                .parse()
                .map(Instruction::AddX)
                .with_context(|| format!("bad addx operand `{value}`")),
            _ => bail!("unknown instruction `{line}`"),
        }
    }
}

impl AocParser for Solver {
    /// Value of the X register during each cycle, cycle 1 first
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let program = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| Instruction::from_line(line).map_err(|e| anyhow!("(line {}) {}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if program.is_empty() {
            return Err(ParseError::MissingData("empty program".into()));
        }
        trace(&program)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        SAMPLE_CYCLES
            .iter()
            .try_fold(0i64, |strength, &cycle| {
                strength.checked_add(register_during(shared, cycle).checked_mul(cycle as i64)?)
            })
            .map(|strength| strength.to_string())
            .ok_or_else(|| SolveError::SolveFailed("signal strength overflows i64".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let picture = (0..SCREEN_HEIGHT)
            .map(|row| {
                (0..SCREEN_WIDTH)
                    .map(|col| {
                        let sprite = register_during(shared, row * SCREEN_WIDTH + col + 1);
                        if sprite.abs_diff(col as i64) <= 1 { '#' } else { '.' }
                    })
                    .collect::<String>()
            })
            .join("\n");
        Ok(picture)
    }
}

fn trace(program: &[Instruction]) -> Result<Vec<i64>, ParseError> {
    let mut x: i64 = 1;
    let mut cycles = Vec::with_capacity(program.len() * 2);
    for instruction in program {
        match instruction {
            Instruction::Noop => cycles.push(x),
            Instruction::AddX(value) => {
                cycles.extend([x, x]);
                x = x
                    .checked_add(*value)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("addx {value} overflows the register")))?;
            }
        }
    }
    // The register keeps its final value once the program has finished
    cycles.push(x);
    Ok(cycles)
}

fn register_during(cycles: &[i64], cycle: usize) -> i64 {
    cycles
        .get(cycle - 1)
        .or_else(|| cycles.last())
        .copied()
        .unwrap_or(1)
}
