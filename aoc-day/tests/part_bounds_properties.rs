//! Property-based tests for part number validation

use aoc_day::{AocParser, ParseError, SolveError, Solver, SolverError, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct Parts<const N: u8>;

impl<const N: u8> AocParser for Parts<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Parts<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    match max_parts {
        1 => (1, Parts::<1>::solve_part_checked_range(&mut (), part)),
        2 => (2, Parts::<2>::solve_part_checked_range(&mut (), part)),
        _ => (3, Parts::<3>::solve_part_checked_range(&mut (), part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected, everything else is delegated
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let (effective_max, result) = checked(max_parts, part);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    /// Solving from text never depends on a previous call
    #[test]
    fn prop_solve_input_is_deterministic(input in ".{0,40}", part in 1u8..=2) {
        let first = Parts::<2>::solve_input(&input, part).unwrap();
        let second = Parts::<2>::solve_input(&input, part).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_solve_input_wraps_range_error() {
    let result = Parts::<2>::solve_input("", 3);
    assert!(matches!(
        result,
        Err(SolverError::SolveError(SolveError::PartOutOfRange(3)))
    ));
}
