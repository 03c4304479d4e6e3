use anyhow::{Context, anyhow};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;
use std::collections::HashSet;

const EXAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "143"), Example::new(2, EXAMPLE, "123")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(a, b)` means page `a` must be printed before page `b`
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl SharedData {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (rules, updates) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected rules and updates separated by a blank line".into()))?;

        let rules = rules
            .lines()
            .map(|line| -> Result<(u32, u32), anyhow::Error> {
                let (a, b) = line.trim().split_once('|').ok_or_else(|| anyhow!("bad rule `{line}`"))?;
                Ok((
                    a.parse().with_context(|| format!("bad page in rule `{line}`"))?,
                    b.parse().with_context(|| format!("bad page in rule `{line}`"))?,
                ))
            })
            .collect::<Result<HashSet<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let updates = updates
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.trim()
                    .split(',')
                    .map(|page| page.parse::<u32>().with_context(|| format!("bad page in update `{line}`")))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        Ok(SharedData { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .updates
            .iter()
            .filter(|update| shared.is_ordered(update))
            .try_fold(0u32, |sum, update| add_page(sum, middle_page(update)?))
            .map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .updates
            .iter()
            .filter(|update| !shared.is_ordered(update))
            .try_fold(0u32, |sum, update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| shared.compare(a, b));
                add_page(sum, middle_page(&fixed)?)
            })
            .map(|sum| sum.to_string())
    }
}

fn middle_page(update: &[u32]) -> Result<u32, SolveError> {
    update
        .get(update.len() / 2)
        .copied()
        .ok_or_else(|| SolveError::SolveFailed("empty update has no middle page".into()))
}

fn add_page(sum: u32, page: u32) -> Result<u32, SolveError> {
    sum.checked_add(page)
        .ok_or_else(|| SolveError::SolveFailed(format!("adding page {page} overflows the total").into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_examples, read_input};
    use aoc_day::{SolverError, SolverExt};

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_reorders_by_rules() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let mut update = vec![97, 13, 75, 29, 47];
        assert!(!shared.is_ordered(&update));
        update.sort_by(|&a, &b| shared.compare(a, b));
        assert_eq!(update, vec![97, 75, 47, 29, 13]);
        assert!(shared.is_ordered(&update));
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            Solver::solve_input("1|2\n3|4", 1),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_page_total_overflow_is_an_error() {
        let ordered = "4294967295|1\n\n4294967295\n4294967295";
        assert!(matches!(
            Solver::solve_input(ordered, 1),
            Err(SolverError::SolveError(SolveError::SolveFailed(_)))
        ));

        let reordered = "4294967295|1\n\n1,4294967295,4294967295\n1,4294967295,4294967295";
        assert_eq!(Solver::solve_input(reordered, 1).unwrap(), "0");
        assert!(matches!(
            Solver::solve_input(reordered, 2),
            Err(SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }

    #[test]
    #[ignore = "requires puzzle input"]
    fn test_real_input() {
        let input = read_input(2024, 5);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "5108");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "7380");
    }
}
