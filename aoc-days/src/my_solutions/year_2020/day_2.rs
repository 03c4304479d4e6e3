use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

const EXAMPLE: &str = "1-3 a: abcde
1-3 b: cdefg
2-9 c: ccccccccc";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "2"), Example::new(2, EXAMPLE, "1")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2020, day = 2, tags = ["validation"])]
pub struct Solver;

/// A password with the corporate policy it was created under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    low: usize,
    high: usize,
    letter: char,
    password: &'a str,
}

impl Entry<'_> {
    /// The letter appears between `low` and `high` times
    fn within_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.low..=self.high).contains(&count)
    }

    /// Exactly one of the 1-based positions `low` and `high` holds the letter
    fn at_one_position(&self) -> bool {
        let holds = |position: usize| self.password.chars().nth(position - 1) == Some(self.letter);
        holds(self.low) != holds(self.high)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^(\d+)-(\d+) (\w): (\w*)$").map_err(|e| ParseError::Other(e.to_string()))?;
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let caps = re
                    .captures(line)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("expected `low-high letter: password`, got `{line}`")))?;
                let bound = |idx: usize| {
                    caps[idx]
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| ParseError::InvalidFormat(format!("bad policy bound in `{line}`")))
                };
                let (low, high) = (bound(1)?, bound(2)?);
                if low > high {
                    return Err(ParseError::InvalidFormat(format!("policy bounds reversed in `{line}`")));
                }
                Ok(Entry {
                    low,
                    high,
                    letter: caps[3].chars().next().unwrap_or_default(),
                    password: caps.get(4).map_or("", |m| m.as_str()),
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|entry| entry.within_count()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|entry| entry.at_one_position()).count().to_string())
    }
}
