use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLES: &[Example] = &[
    Example::new(1, "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet", "142"),
    Example::new(
        2,
        "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen",
        "281",
    ),
];

const DIGIT_WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2023, day = 1, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibrate(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibrate(shared, true)
    }
}

fn calibrate(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| {
            let mut digits = (0..line.len()).filter_map(|idx| digit_at(line, idx, spelled));
            let first = digits
                .next()
                .ok_or_else(|| SolveError::SolveFailed(format!("no digit in `{line}`").into()))?;
            let last = digits.last().unwrap_or(first);
            Ok(first * 10 + last)
        })
        .sum::<Result<u32, SolveError>>()
        .map(|total| total.to_string())
}

/// Digit starting at byte `idx`; spelled words may overlap, as in `twone`
fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[idx..];
    if let Some(digit) = (rest[0] as char).to_digit(10) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|word| rest.starts_with(word.as_bytes()))
        .map(|pos| pos as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_examples, read_input};
    use aoc_day::SolverExt;

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(Solver::solve_input("twone", 2).unwrap(), "21");
        assert_eq!(Solver::solve_input("eighthree", 2).unwrap(), "83");
    }

    #[test]
    fn test_single_digit_is_both_ends() {
        assert_eq!(Solver::solve_input("treb7uchet", 1).unwrap(), "77");
    }

    #[test]
    fn test_line_without_digit_fails() {
        assert!(Solver::solve_input("abc", 1).is_err());
    }

    #[test]
    #[ignore = "requires puzzle input"]
    fn test_real_input() {
        let input = read_input(2023, 1);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "54916");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "54728");
    }
}
