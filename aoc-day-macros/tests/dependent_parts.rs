//! Part 2 reusing what part 1 left in the shared data

use aoc_day::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

struct Loads {
    groups: Vec<Vec<u32>>,
    /// Group totals, largest first, filled by whichever part needs them first
    totals: Option<Vec<u32>>,
}

impl Loads {
    fn totals(&mut self) -> &[u32] {
        let groups = &self.groups;
        self.totals.get_or_insert_with(|| {
            let mut totals: Vec<u32> = groups.iter().map(|g| g.iter().sum()).collect();
            totals.sort_unstable_by(|a, b| b.cmp(a));
            totals
        })
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Heaviest;

impl AocParser for Heaviest {
    type SharedData<'a> = Loads;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let groups = input
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<_, _>>()?;
        Ok(Loads { groups, totals: None })
    }
}

impl PartSolver<1> for Heaviest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let top = shared.totals().first().copied();
        top.map(|t| t.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no groups".into()))
    }
}

impl PartSolver<2> for Heaviest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.totals().iter().take(2).sum::<u32>().to_string())
    }
}

const INPUT: &str = "1\n2\n\n10\n\n4\n4";

#[test]
fn test_part1_caches_totals() {
    let mut shared = Heaviest::parse(INPUT).unwrap();
    assert!(shared.totals.is_none());

    assert_eq!(Heaviest::solve_part(&mut shared, 1).unwrap(), "10");
    assert_eq!(shared.totals.as_deref(), Some(&[10, 8, 3][..]));
}

#[test]
fn test_part2_reuses_cached_totals() {
    let mut shared = Heaviest::parse(INPUT).unwrap();
    Heaviest::solve_part(&mut shared, 1).unwrap();

    // Stale cache wins over the groups
    shared.groups.clear();
    assert_eq!(Heaviest::solve_part(&mut shared, 2).unwrap(), "18");
}

#[test]
fn test_part2_alone() {
    assert_eq!(Heaviest::solve_input(INPUT, 2).unwrap(), "18");
}

#[test]
fn test_module_failure_surfaces() {
    let mut shared = Loads {
        groups: Vec::new(),
        totals: None,
    };
    assert!(matches!(
        Heaviest::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
