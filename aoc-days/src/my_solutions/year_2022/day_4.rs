use anyhow::{Context, anyhow, ensure};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::ops::RangeInclusive;

const EXAMPLE: &str = "2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "2"), Example::new(2, EXAMPLE, "4")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 4, tags = ["ranges"])]
pub struct Solver;

type Sections = RangeInclusive<u32>;

fn sections(text: &str) -> Result<Sections, anyhow::Error> {
    let (start, end) = text.split_once('-').ok_or_else(|| anyhow!("expected `start-end`, got `{text}`"))?;
    let start: u32 = start.parse().with_context(|| format!("bad section `{start}`"))?;
    let end: u32 = end.parse().with_context(|| format!("bad section `{end}`"))?;
    ensure!(start <= end, "section range `{text}` runs backwards");
    Ok(start..=end)
}

fn pair(line: &str) -> Result<(Sections, Sections), anyhow::Error> {
    let (first, second) = line.split_once(',').ok_or_else(|| anyhow!("expected two assignments"))?;
    Ok((sections(first)?, sections(second)?))
}

fn contains(outer: &Sections, inner: &Sections) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

impl AocParser for Solver {
    /// Section assignments of each pair of elves
    type SharedData<'a> = Vec<(Sections, Sections)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| pair(line).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .iter()
            .filter(|(a, b)| contains(a, b) || contains(b, a))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|(a, b)| overlaps(a, b)).count().to_string())
    }
}
