use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

const EXAMPLE: &str = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "157"), Example::new(2, EXAMPLE, "70")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 3, tags = ["sets"])]
pub struct Solver;

/// Set of item priorities, bit `p` set when an item of priority `p` is present
type ItemSet = u64;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.bytes().all(|b| b.is_ascii_alphabetic()) {
                    Ok(line)
                } else {
                    Err(ParseError::InvalidFormat(format!("rucksack `{line}` holds non-letter items")))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|line| {
                if line.len() % 2 != 0 {
                    return Err(SolveError::SolveFailed(
                        format!("rucksack `{line}` cannot be split into equal compartments").into(),
                    ));
                }
                let (left, right) = line.split_at(line.len() / 2);
                common_priority(&[left, right])
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::SolveFailed(
                format!("{} rucksacks do not form groups of three", shared.len()).into(),
            ));
        }
        shared
            .iter()
            .tuples()
            .map(|(a, b, c)| common_priority(&[*a, *b, *c]))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

fn priority(item: u8) -> u32 {
    match item {
        b'a'..=b'z' => (item - b'a' + 1) as u32,
        _ => (item - b'A' + 27) as u32,
    }
}

fn item_set(items: &str) -> ItemSet {
    items.bytes().fold(0, |set, b| set | 1 << priority(b))
}

/// Priority of the single item type present in every group member
fn common_priority(members: &[&str]) -> Result<u32, SolveError> {
    let common = members.iter().fold(ItemSet::MAX, |set, items| set & item_set(items));
    match common.count_ones() {
        1 => Ok(common.trailing_zeros()),
        0 => Err(SolveError::SolveFailed(
            format!("no common item in {members:?}").into(),
        )),
        _ => Err(SolveError::SolveFailed(
            format!("more than one common item in {members:?}").into(),
        )),
    }
}
