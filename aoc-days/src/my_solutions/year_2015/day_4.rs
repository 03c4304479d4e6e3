use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use md5::{Digest, Md5};

const INPUT: &str = "yzbqklnj";

// Part 2 hashes close to seven million candidates
const EXAMPLES: &[Example] = &[Example::new(1, "abcdef", "609043"), Example::new(2, "abcdef", "6742839")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES, input = INPUT)]
#[aoc(year = 2015, day = 4, tags = ["md5", "brute-force"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    key: &'a str,
    five_zeros: Option<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key is empty".into()));
        }
        Ok(SharedData {
            key,
            five_zeros: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let answer = mine(shared.key, 5, 0)?;
        shared.five_zeros = Some(answer);
        Ok(answer.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Six leading zeros imply five, so nothing below the part 1 answer can match.
        let start = shared.five_zeros.unwrap_or(0);
        Ok(mine(shared.key, 6, start)?.to_string())
    }
}

/// Lowest `n >= start` whose hash of `key` followed by `n` begins with `zeros` hex zeros
fn mine(key: &str, zeros: usize, start: u64) -> Result<u64, SolveError> {
    let prefix = Md5::new_with_prefix(key.as_bytes());
    (start..=u64::MAX)
        .find(|n| {
            let digest = prefix.clone().chain_update(n.to_string()).finalize();
            has_zero_prefix(&digest, zeros)
        })
        .ok_or_else(|| SolveError::SolveFailed("no suffix produces the requested hash".into()))
}

fn has_zero_prefix(digest: &[u8], nibbles: usize) -> bool {
    let full = nibbles / 2;
    digest[..full].iter().all(|&b| b == 0) && (nibbles % 2 == 0 || digest[full] >> 4 == 0)
}
