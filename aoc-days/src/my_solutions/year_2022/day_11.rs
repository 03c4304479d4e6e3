use anyhow::{Context, anyhow, ensure};
use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "10605"), Example::new(2, EXAMPLE, "2713310158")];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 11, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, old: u64) -> Option<u64> {
        match self {
            Operation::Add(amount) => old.checked_add(amount),
            Operation::Multiply(amount) => old.checked_mul(amount),
            Operation::Square => old.checked_mul(old),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

impl Monkey {
    fn target(&self, worry: u64) -> usize {
        if worry % self.divisor == 0 {
            self.if_true
        } else {
            self.if_false
        }
    }
}

/// The text after `prefix` on the next line
fn field<'a>(lines: &mut impl Iterator<Item = &'a str>, prefix: &str) -> Result<&'a str, anyhow::Error> {
    let line = lines.next().ok_or_else(|| anyhow!("missing `{prefix}` line"))?;
    line.strip_prefix(prefix)
        .ok_or_else(|| anyhow!("expected `{prefix}`, got `{line}`"))
}

fn monkey(index: usize, block: &str) -> Result<Monkey, anyhow::Error> {
    let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());

    let number: usize = field(&mut lines, "Monkey ")?
        .trim_end_matches(':')
        .parse()
        .context("bad monkey number")?;
    ensure!(number == index, "monkey {number} listed in position {index}");

    let items = field(&mut lines, "Starting items:")?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<u64>().with_context(|| format!("bad item `{item}`")))
        .collect::<Result<Vec<u64>, _>>()?;

    let operation = match field(&mut lines, "Operation: new = old ")?.split_once(' ') {
        Some(("*", "old")) => Operation::Square,
        Some(("*", amount)) => Operation::Multiply(amount.parse().context("bad factor")?),
        Some(("+", amount)) => Operation::Add(amount.parse().context("bad addend")?),
        other => return Err(anyhow!("unsupported operation {other:?}")),
    };

    let divisor: u64 = field(&mut lines, "Test: divisible by ")?.parse().context("bad divisor")?;
    ensure!(divisor > 0, "divisor must be positive");
    let if_true: usize = field(&mut lines, "If true: throw to monkey ")?.parse().context("bad target")?;
    let if_false: usize = field(&mut lines, "If false: throw to monkey ")?.parse().context("bad target")?;
    ensure!(if_true != index && if_false != index, "monkey {index} throws to itself");

    Ok(Monkey { items, operation, divisor, if_true, if_false })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Monkey>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let monkeys = input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(idx, block)| monkey(idx, block).map_err(|e| anyhow!("(monkey {}) {:#}", idx, e)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if monkeys.len() < 2 {
            return Err(ParseError::MissingData("need at least two monkeys".into()));
        }
        if let Some(target) = monkeys
            .iter()
            .flat_map(|m| [m.if_true, m.if_false])
            .find(|&target| target >= monkeys.len())
        {
            return Err(ParseError::InvalidFormat(format!("throw to missing monkey {target}")));
        }
        Ok(monkeys)
    }
}

/// Product of the two largest inspection counts after `rounds` rounds
fn monkey_business(monkeys: &[Monkey], rounds: usize, relief: impl Fn(u64) -> u64) -> Result<u64, SolveError> {
    let mut held: Vec<Vec<u64>> = monkeys.iter().map(|m| m.items.clone()).collect();
    let mut inspected = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for (idx, monkey) in monkeys.iter().enumerate() {
            let items = std::mem::take(&mut held[idx]);
            inspected[idx] += items.len() as u64;
            for item in items {
                let worry = monkey
                    .operation
                    .apply(item)
                    .map(&relief)
                    .ok_or_else(|| SolveError::SolveFailed(format!("worry level of monkey {idx} overflows").into()))?;
                held[monkey.target(worry)].push(worry);
            }
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    inspected[0]
        .checked_mul(inspected[1])
        .ok_or_else(|| SolveError::SolveFailed("monkey business overflows u64".into()))
}

impl PartSolver<1> for Solver {
    /// Worry drops to a third after each inspection
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        monkey_business(shared, 20, |worry| worry / 3).map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Worry is kept modulo the product of every divisor, which leaves each test unchanged
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let modulus = shared
            .iter()
            .try_fold(1u64, |product, m| product.checked_mul(m.divisor))
            .ok_or_else(|| SolveError::SolveFailed("product of divisors overflows u64".into()))?;
        monkey_business(shared, 10_000, |worry| worry % modulus).map(|total| total.to_string())
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
    fn test_parse_monkey() {
        let monkeys = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[1].items, vec![54, 65, 75, 74]);
        assert_eq!(monkeys[2].operation, Operation::Square);
        assert_eq!((monkeys[3].divisor, monkeys[3].if_true, monkeys[3].if_false), (17, 0, 1));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let input = EXAMPLE.replace("If false: throw to monkey 1", "If false: throw to monkey 7");
        assert!(matches!(
            Solver::solve_input(&input, 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_worry_overflow_is_an_error() {
        let input = "Monkey 0:
  Starting items: 4294967296
  Operation: new = old * old
  Test: divisible by 2
    If true: throw to monkey 1
    If false: throw to monkey 1

Monkey 1:
  Starting items:
  Operation: new = old + 1
  Test: divisible by 3
    If true: throw to monkey 0
    If false: throw to monkey 0";
        assert!(matches!(
            Solver::solve_input(input, 1),
            Err(SolverError::SolveError(SolveError::SolveFailed(_)))
        ));
    }
}
