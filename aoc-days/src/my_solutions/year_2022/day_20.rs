use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "1
2
-3
3
-2
0
4";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "3"), Example::new(2, EXAMPLE, "1623178306")];

const DECRYPTION_KEY: i64 = 811_589_153;
/// Offsets after zero whose numbers form the grove coordinates
const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 20, tags = ["simulation"])]
pub struct Solver;

impl AocParser for Solver {
    /// The encrypted file, in its original order
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let numbers = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                line.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("(line {}) bad number `{line}`", idx + 1)))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if !numbers.contains(&0) {
            return Err(ParseError::MissingData("the file has no 0 to count from".into()));
        }
        Ok(numbers)
    }
}

/// Move every number by its value, in original order, `rounds` times.
/// Returns the original indices in their mixed order.
fn mix(numbers: &[i64], rounds: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..numbers.len()).collect();
    // A moving number leaves `len - 1` others to step over
    let Some(others) = numbers.len().checked_sub(1).filter(|&others| others > 0) else {
        return order;
    };
    for _ in 0..rounds {
        for (original, &value) in numbers.iter().enumerate() {
            let Some(from) = order.iter().position(|&idx| idx == original) else {
                continue;
            };
            order.remove(from);
            let to = ((from as i64 + value.rem_euclid(others as i64)) % others as i64) as usize;
            order.insert(to, original);
        }
    }
    order
}

fn grove_coordinates(numbers: &[i64], rounds: usize) -> Result<i64, SolveError> {
    let order = mix(numbers, rounds);
    let zero = order
        .iter()
        .position(|&idx| numbers[idx] == 0)
        .ok_or_else(|| SolveError::SolveFailed("0 vanished while mixing".into()))?;
    GROVE_OFFSETS
        .iter()
        .try_fold(0i64, |sum, offset| sum.checked_add(numbers[order[(zero + offset) % order.len()]]))
        .ok_or_else(|| SolveError::SolveFailed("grove coordinates overflow i64".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_coordinates(shared, 1).map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Apply the decryption key, then mix ten times
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let decrypted = shared
            .iter()
            .map(|&number| number.checked_mul(DECRYPTION_KEY))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SolveError::SolveFailed("decryption key overflows i64".into()))?;
        grove_coordinates(&decrypted, 10).map(|sum| sum.to_string())
    }
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
    fn test_single_mix_order() {
        let numbers = Solver::parse(EXAMPLE).unwrap();
        let mixed: Vec<i64> = mix(&numbers, 1).into_iter().map(|idx| numbers[idx]).collect();
        // Read as a circle this is 1, 2, -3, 4, 0, 3, -2
        assert_eq!(mixed, vec![-2, 1, 2, -3, 4, 0, 3]);
    }

    #[test]
    fn test_lone_zero() {
        assert_eq!(Solver::solve_input("0", 1).unwrap(), "0");
    }

    #[test]
    fn test_file_needs_zero() {
        assert!(matches!(
            Solver::solve_input("1\n2", 1),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_decryption_overflow_is_an_error() {
        assert!(matches!(
            Solver::solve_input("0\n9223372036854775807", 2),
            Err(SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }

    #[test]
    fn test_real_input() {
        let input = read_input(2022, 20);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "8764");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "535648840980");
    }
}
