use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE, "3068"),
    Example::new(2, EXAMPLE, "1514285714288"),
];

/// Rock rows from the bottom up; bit `i` is column `i` counted from the left wall
const SHAPES: [&[u8]; 5] = [
    &[0b1111],
    &[0b010, 0b111, 0b010],
    &[0b111, 0b100, 0b100],
    &[0b1, 0b1, 0b1, 0b1],
    &[0b11, 0b11],
];

const RIGHT_WALL: u8 = 1 << 6;
/// Rows compared when looking for a repeating state
const SURFACE_ROWS: usize = 32;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 17, tags = ["simulation", "cycle-detection"])]
pub struct Solver;

/// Jet pattern, `true` pushing right
type Jets = Vec<bool>;

impl AocParser for Solver {
    type SharedData<'a> = Jets;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let jets = input
            .trim()
            .bytes()
            .enumerate()
            .map(|(idx, jet)| match jet {
                b'>' => Ok(true),
                b'<' => Ok(false),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected `{}` at position {}",
                    other as char,
                    idx + 1
                ))),
            })
            .collect::<Result<Jets, _>>()?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("empty jet pattern".into()));
        }
        Ok(jets)
    }
}

/// The seven-wide chamber and the settled rocks in it
struct Chamber<'a> {
    jets: &'a [bool],
    next_jet: usize,
    rows: Vec<u8>,
}

impl Chamber<'_> {
    fn hits(&self, rock: &[u8], bottom: usize) -> bool {
        rock.iter()
            .enumerate()
            .any(|(idx, &row)| self.rows.get(bottom + idx).is_some_and(|&settled| settled & row != 0))
    }

    fn drop_rock(&mut self, shape: &[u8]) {
        let mut rock: Vec<u8> = shape.iter().map(|row| row << 2).collect();
        let mut bottom = self.rows.len() + 3;
        loop {
            let right = self.jets[self.next_jet];
            self.next_jet = (self.next_jet + 1) % self.jets.len();
            let pushed: Option<Vec<u8>> = if right {
                rock.iter().all(|row| row & RIGHT_WALL == 0).then(|| rock.iter().map(|row| row << 1).collect())
            } else {
                rock.iter().all(|row| row & 1 == 0).then(|| rock.iter().map(|row| row >> 1).collect())
            };
            if let Some(pushed) = pushed.filter(|pushed| !self.hits(pushed, bottom)) {
                rock = pushed;
            }

            if bottom == 0 || self.hits(&rock, bottom - 1) {
                break;
            }
            bottom -= 1;
        }

        for (idx, row) in rock.into_iter().enumerate() {
            match self.rows.get_mut(bottom + idx) {
                Some(settled) => *settled |= row,
                None => self.rows.push(row),
            }
        }
    }
}

/// Tower height after `rocks` rocks; a repeating surface lets whole cycles be skipped
fn tower_height(jets: &[bool], rocks: u64) -> Result<u64, SolveError> {
    let mut chamber = Chamber {
        jets,
        next_jet: 0,
        rows: Vec::new(),
    };
    let mut seen: HashMap<(usize, usize, Vec<u8>), (u64, u64)> = HashMap::new();
    let mut skipped = None;
    let mut dropped = 0u64;

    while dropped < rocks {
        let shape = (dropped % SHAPES.len() as u64) as usize;
        chamber.drop_rock(SHAPES[shape]);
        dropped += 1;

        let height = chamber.rows.len() as u64;
        if skipped.is_some() || chamber.rows.len() < SURFACE_ROWS {
            continue;
        }
        let surface = chamber.rows[chamber.rows.len() - SURFACE_ROWS..].to_vec();
        let key = ((shape + 1) % SHAPES.len(), chamber.next_jet, surface);
        if let Some(&(earlier_rocks, earlier_height)) = seen.get(&key) {
            let period = dropped - earlier_rocks;
            let cycles = (rocks - dropped) / period;
            let gained = cycles
                .checked_mul(height - earlier_height)
                .ok_or_else(|| SolveError::SolveFailed("tower height overflows u64".into()))?;
            skipped = Some(gained);
            dropped += cycles * period;
        } else {
            seen.insert(key, (dropped, height));
        }
    }

    (chamber.rows.len() as u64)
        .checked_add(skipped.unwrap_or_default())
        .ok_or_else(|| SolveError::SolveFailed("tower height overflows u64".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        tower_height(shared, 2022).map(|height| height.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        tower_height(shared, 1_000_000_000_000).map(|height| height.to_string())
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
    fn test_first_rocks() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(tower_height(&jets, 1).unwrap(), 1);
        assert_eq!(tower_height(&jets, 2).unwrap(), 4);
        assert_eq!(tower_height(&jets, 10).unwrap(), 17);
    }

    #[test]
    fn test_bad_jet() {
        assert!(matches!(
            Solver::solve_input("<<>x", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            Solver::solve_input("\n", 1),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_real_input() {
        let input = read_input(2022, 17);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "3147");
        assert_eq!(Solver::solve_input(&input, 2).unwrap(), "1532163742758");
    }
}
