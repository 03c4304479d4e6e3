use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "A Y
B X
C Z";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "15"), Example::new(2, EXAMPLE, "12")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 2, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    fn score(self) -> u64 {
        self as u64 + 1
    }

    /// The shape this one defeats
    fn beats(self) -> Shape {
        Self::ALL[(self as usize + 2) % 3]
    }

    /// The shape that defeats this one
    fn beaten_by(self) -> Shape {
        Self::ALL[(self as usize + 1) % 3]
    }

    fn outcome_against(self, opponent: Shape) -> u64 {
        if self.beats() == opponent {
            6
        } else if self == opponent {
            3
        } else {
            0
        }
    }
}

/// One line of the strategy guide, `A`-`C` then `X`-`Z`, as column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: usize,
    response: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line.as_bytes() {
                &[opponent @ b'A'..=b'C', b' ', response @ b'X'..=b'Z'] => Ok(Round {
                    opponent: usize::from(opponent - b'A'),
                    response: usize::from(response - b'X'),
                }),
                _ => Err(ParseError::InvalidFormat(format!("bad round `{line}`"))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    /// The second column is the shape to play
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|round| {
                let (opponent, mine) = (Shape::ALL[round.opponent], Shape::ALL[round.response]);
                mine.score() + mine.outcome_against(opponent)
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// The second column is the outcome to reach: lose, draw, win
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|round| {
                let opponent = Shape::ALL[round.opponent];
                let mine = match round.response {
                    0 => opponent.beats(),
                    1 => opponent,
                    _ => opponent.beaten_by(),
                };
                mine.score() + mine.outcome_against(opponent)
            })
            .sum();
        Ok(total.to_string())
    }
}
