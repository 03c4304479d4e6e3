use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "2333133121414131402";

const EXAMPLES: &[Example] = &[
    Example::new(1, "12345", "60"),
    Example::new(1, EXAMPLE, "1928"),
    Example::new(2, "12345", "132"),
    Example::new(2, EXAMPLE, "2858"),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2024, day = 9, tags = ["compaction"])]
pub struct Solver;

/// A contiguous run of blocks on the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    pos: u64,
    len: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct File {
    id: u64,
    span: Span,
}

impl File {
    fn checksum(&self) -> u64 {
        (self.span.pos..self.span.pos + self.span.len).map(|block| block * self.id).sum()
    }
}

impl AocParser for Solver {
    /// Dense disk map digits, alternating file and free lengths
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let digits = input
            .trim()
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(ParseError::InvalidFormat(format!("unexpected `{}` in disk map", b as char))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if digits.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        Ok(digits)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks: Vec<Option<u64>> = shared
            .iter()
            .enumerate()
            .flat_map(|(idx, &len)| {
                let id = (idx % 2 == 0).then_some(idx as u64 / 2);
                std::iter::repeat_n(id, len as usize)
            })
            .collect();

        let (mut free, mut last) = (0, blocks.len());
        loop {
            while free < last && blocks[free].is_some() {
                free += 1;
            }
            while last > free && blocks[last - 1].is_none() {
                last -= 1;
            }
            if free >= last {
                break;
            }
            blocks.swap(free, last - 1);
        }

        let checksum: u64 = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| pos as u64 * id))
            .sum();
        Ok(checksum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut files, mut gaps) = layout(shared);

        for file in files.iter_mut().rev() {
            let target = gaps
                .iter_mut()
                .take_while(|gap| gap.pos < file.span.pos)
                .find(|gap| gap.len >= file.span.len);
            if let Some(gap) = target {
                file.span.pos = gap.pos;
                gap.pos += file.span.len;
                gap.len -= file.span.len;
            }
        }

        let checksum: u64 = files.iter().map(File::checksum).sum();
        Ok(checksum.to_string())
    }
}

/// Split the disk map into files (by increasing id) and free gaps, both left to right
fn layout(digits: &[u8]) -> (Vec<File>, Vec<Span>) {
    let mut files = Vec::with_capacity(digits.len() / 2 + 1);
    let mut gaps = Vec::with_capacity(digits.len() / 2);
    let mut pos = 0;
    for (idx, &len) in digits.iter().enumerate() {
        let span = Span { pos, len: len as u64 };
        if idx % 2 == 0 {
            files.push(File {
                id: idx as u64 / 2,
                span,
            });
        } else if len > 0 {
            gaps.push(span);
        }
        pos += len as u64;
    }
    (files, gaps)
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
    fn test_layout() {
        let (files, gaps) = layout(&[1, 2, 3, 4, 5]);
        let spans: Vec<_> = files.iter().map(|f| (f.id, f.span.pos, f.span.len)).collect();
        assert_eq!(spans, vec![(0, 0, 1), (1, 3, 3), (2, 10, 5)]);
        assert_eq!(gaps, vec![Span { pos: 1, len: 2 }, Span { pos: 6, len: 4 }]);
    }

    #[test]
    fn test_file_only_moves_left() {
        // File 1 fits only the gap to its right, so it stays put
        assert_eq!(Solver::solve_input("1125", 2).unwrap(), "5");
        assert_eq!(Solver::solve_input("1125", 1).unwrap(), "3");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(matches!(
            Solver::solve_input("12a", 1),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    #[ignore = "requires puzzle input"]
    fn test_real_input() {
        let input = read_input(2024, 9);
        assert_eq!(Solver::solve_input(&input, 1).unwrap(), "6359213660505");
    }
}
