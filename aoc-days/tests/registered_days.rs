//! Every Day Module in the crate registers itself and passes its own examples

use aoc_day::{NOT_APPLICABLE, SolverRegistry, SolverRegistryBuilder};

// Linking the crate is what submits its plugins
use aoc_days as _;

const EXPECTED_DAYS: &[(u16, u8)] = &[
    (2015, 4),
    (2015, 25),
    (2020, 2),
    (2020, 3),
    (2020, 4),
    (2022, 1),
    (2022, 2),
    (2022, 3),
    (2022, 4),
    (2022, 5),
    (2022, 6),
    (2022, 7),
    (2022, 8),
    (2022, 9),
    (2022, 10),
    (2022, 11),
    (2022, 12),
    (2022, 13),
    (2022, 15),
    (2022, 16),
    (2022, 17),
    (2022, 20),
    (2023, 1),
    (2024, 1),
    (2024, 2),
    (2024, 3),
    (2024, 4),
    (2024, 5),
    (2024, 6),
    (2024, 7),
    (2024, 8),
    (2024, 9),
    (2024, 12),
];

fn registry() -> SolverRegistry {
    SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build()
}

#[test]
fn test_all_days_registered_in_order() {
    let registry = registry();
    let listed: Vec<(u16, u8)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day))
        .collect();
    assert_eq!(listed, EXPECTED_DAYS);
}

#[test]
fn test_every_day_has_two_parts_and_examples() {
    let registry = registry();
    for info in registry.storage().iter_info() {
        assert_eq!(info.parts, 2, "{} day {}", info.year, info.day);
        assert!(!info.examples.is_empty(), "{} day {} has no examples", info.year, info.day);
    }
}

#[test]
fn test_examples_through_registry() {
    let registry = registry();
    for info in registry.storage().iter_info() {
        for example in info.examples {
            let mut solver = registry
                .create_solver(info.year, info.day, example.input)
                .unwrap_or_else(|e| panic!("{} day {}: {e}", info.year, info.day));
            let answer = solver
                .solve(example.part)
                .unwrap_or_else(|e| panic!("{} day {} part {}: {e}", info.year, info.day, example.part))
                .answer;
            assert_eq!(answer, example.expected, "{} day {} part {}", info.year, info.day, example.part);
        }
    }
}

#[test]
fn test_runs_are_deterministic() {
    let registry = registry();
    for info in registry.storage().iter_info() {
        let Some(example) = info.examples.first() else {
            continue;
        };
        let answers: Vec<String> = (0..2)
            .map(|_| {
                let mut solver = registry.create_solver(info.year, info.day, example.input).unwrap();
                solver.solve(example.part).unwrap().answer
            })
            .collect();
        assert_eq!(answers[0], answers[1], "{} day {}", info.year, info.day);
    }
}

#[test]
fn test_bundled_inputs() {
    let registry = registry();
    let bundled: Vec<(u16, u8)> = registry
        .storage()
        .iter_info()
        .filter(|info| info.input.is_some())
        .map(|info| (info.year, info.day))
        .collect();
    assert_eq!(bundled, vec![(2015, 4), (2015, 25)]);

    let input = registry.storage().get_info(2015, 25).and_then(|info| info.input).unwrap();
    let mut solver = registry.create_solver(2015, 25, input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "19980801");
    assert_eq!(solver.solve(2).unwrap().answer, NOT_APPLICABLE);
}

#[test]
fn test_year_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2022)
        .unwrap()
        .build();
    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 17, 20]);
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();
    let listed: Vec<(u16, u8)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day))
        .collect();
    assert_eq!(
        listed,
        vec![(2020, 3), (2022, 8), (2022, 12), (2024, 4), (2024, 6), (2024, 8), (2024, 12)]
    );
}
