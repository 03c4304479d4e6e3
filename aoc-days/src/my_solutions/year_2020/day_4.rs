use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

const EXAMPLE: &str = "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in";

const INVALID: &str = "eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007";

const VALID: &str = "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE, "2"),
    Example::new(2, INVALID, "0"),
    Example::new(2, VALID, "4"),
];

/// Every field except `cid`, which the North Pole credentials lack
const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2020, day = 4, tags = ["validation"])]
pub struct Solver;

/// Fields of one passport by key
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Passport<'a>(HashMap<&'a str, &'a str>);

impl<'a> Passport<'a> {
    fn from_record(record: &'a str) -> Result<Self, ParseError> {
        record
            .split_whitespace()
            .map(|field| {
                field
                    .split_once(':')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("field `{field}` has no `key:value` form")))
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(Passport)
    }

    fn has_required_fields(&self) -> bool {
        REQUIRED.iter().all(|key| self.0.contains_key(*key))
    }

    fn is_valid(&self) -> bool {
        let field = |key: &str| self.0.get(key).copied().unwrap_or_default();
        self.has_required_fields()
            && year_within(field("byr"), 1920, 2002)
            && year_within(field("iyr"), 2010, 2020)
            && year_within(field("eyr"), 2020, 2030)
            && height_valid(field("hgt"))
            && hair_color_valid(field("hcl"))
            && EYE_COLORS.iter().any(|&color| color == field("ecl"))
            && field("pid").len() == 9
            && field("pid").bytes().all(|b| b.is_ascii_digit())
    }
}

fn year_within(value: &str, low: u32, high: u32) -> bool {
    value.parse::<u32>().is_ok_and(|year| (low..=high).contains(&year))
}

fn height_valid(value: &str) -> bool {
    let within = |number: &str, low: u32, high: u32| number.parse::<u32>().is_ok_and(|h| (low..=high).contains(&h));
    if let Some(cm) = value.strip_suffix("cm") {
        within(cm, 150, 193)
    } else if let Some(inches) = value.strip_suffix("in") {
        within(inches, 59, 76)
    } else {
        false
    }
}

fn hair_color_valid(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut passports = Vec::new();
        let mut start = None;
        // Records are runs of non-blank lines; offsets keep the fields borrowed from the input
        for (offset, line) in line_offsets(input) {
            match (line.trim().is_empty(), start) {
                (false, None) => start = Some(offset),
                (true, Some(from)) => {
                    passports.push(Passport::from_record(&input[from..offset])?);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(from) = start {
            passports.push(Passport::from_record(&input[from..])?);
        }
        if passports.is_empty() {
            return Err(ParseError::MissingData("no passports in input".into()));
        }
        Ok(passports)
    }
}

/// Each line with the byte offset it starts at
fn line_offsets(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.has_required_fields()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| p.is_valid()).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::check_examples;
    use aoc_day::{SolverError, SolverExt};

    #[test]
    fn test_examples() {
        check_examples::<Solver>();
    }

    #[test]
    fn test_field_rules() {
        assert!(year_within("2002", 1920, 2002));
        assert!(!year_within("2003", 1920, 2002));
        assert!(height_valid("60in"));
        assert!(height_valid("190cm"));
        assert!(!height_valid("190in"));
        assert!(!height_valid("190"));
        assert!(hair_color_valid("#123abc"));
        assert!(!hair_color_valid("#123abz"));
        assert!(!hair_color_valid("123abc"));
    }

    #[test]
    fn test_part2_on_first_example() {
        assert_eq!(Solver::solve_input(EXAMPLE, 2).unwrap(), "2");
    }

    #[test]
    fn test_crlf_records() {
        let crlf = EXAMPLE.replace('\n', "\r\n");
        assert_eq!(Solver::solve_input(&crlf, 1).unwrap(), "2");
    }

    #[test]
    fn test_field_without_colon() {
        assert!(matches!(
            Solver::solve_input("byr:1937 iyr", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }
}
