use aoc_day::{Solver, SolverExt};
use std::path::PathBuf;

/// Read a puzzle input from the shared `inputs/` directory
pub fn read_input(year: u16, day: u8) -> String {
    let path: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "..",
        "inputs",
        &year.to_string(),
        &format!("day_{day:02}.txt"),
    ]
    .iter()
    .collect();
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing puzzle input {}: {e}", path.display()))
}

/// Assert every bundled example of `S` produces its expected answer
pub fn check_examples<S: Solver>() {
    assert!(!S::EXAMPLES.is_empty(), "no examples bundled");
    for example in S::EXAMPLES {
        let answer = S::solve_input(example.input, example.part)
            .unwrap_or_else(|e| panic!("part {} example failed: {e}", example.part));
        assert_eq!(answer, example.expected, "part {} example", example.part);
    }
}
