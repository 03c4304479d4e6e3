use aoc_day::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_day_macros::{AocSolver, AutoRegisterSolver};

const EXAMPLE: &str = "$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

const EXAMPLES: &[Example] = &[Example::new(1, EXAMPLE, "95437"), Example::new(2, EXAMPLE, "24933642")];

const SMALL_DIRECTORY: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 7, tags = ["tree"])]
pub struct Solver;

/// Total size of every directory, with the root last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedData {
    sizes: Vec<u64>,
}

impl SharedData {
    fn root(&self) -> u64 {
        self.sizes.last().copied().unwrap_or_default()
    }
}

/// Sizes of the directories on the current path, root first
struct Walk {
    open: Vec<u64>,
    sizes: Vec<u64>,
}

impl Walk {
    fn leave(&mut self) -> Result<(), ParseError> {
        let Some(size) = self.open.pop() else {
            return Ok(());
        };
        self.sizes.push(size);
        if let Some(parent) = self.open.last_mut() {
            *parent = parent
                .checked_add(size)
                .ok_or_else(|| ParseError::InvalidFormat("directory size overflows u64".into()))?;
        }
        Ok(())
    }

    fn add_file(&mut self, size: u64) -> Result<(), ParseError> {
        let current = self
            .open
            .last_mut()
            .ok_or_else(|| ParseError::InvalidFormat("file listed outside any directory".into()))?;
        *current = current
            .checked_add(size)
            .ok_or_else(|| ParseError::InvalidFormat("directory size overflows u64".into()))?;
        Ok(())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut walk = Walk { open: vec![0], sizes: Vec::new() };
        let mut lines = 0;
        for (idx, line) in input.lines().map(str::trim).filter(|line| !line.is_empty()).enumerate() {
            lines += 1;
            let bad = || ParseError::InvalidFormat(format!("(line {}) unexpected `{line}`", idx + 1));
            match line.split_whitespace().collect::<Vec<_>>()[..] {
                ["$", "cd", "/"] => {
                    while walk.open.len() > 1 {
                        walk.leave()?;
                    }
                }
                ["$", "cd", ".."] => {
                    if walk.open.len() == 1 {
                        return Err(ParseError::InvalidFormat(format!("(line {}) cannot leave the root", idx + 1)));
                    }
                    walk.leave()?;
                }
                ["$", "cd", _] => walk.open.push(0),
                ["$", "ls"] | ["dir", _] => {}
                [size, _] => walk.add_file(size.parse().map_err(|_| bad())?)?,
                _ => return Err(bad()),
            }
        }
        if lines == 0 {
            return Err(ParseError::MissingData("empty terminal output".into()));
        }
        while !walk.open.is_empty() {
            walk.leave()?;
        }
        Ok(SharedData { sizes: walk.sizes })
    }
}

impl PartSolver<1> for Solver {
    /// Sum of the directories holding at most 100000
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.sizes.iter().filter(|&&size| size <= SMALL_DIRECTORY).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    /// Smallest directory whose removal leaves room for the update
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let free = DISK_SIZE.saturating_sub(shared.root());
        let needed = UPDATE_SIZE.saturating_sub(free);
        shared
            .sizes
            .iter()
            .filter(|&&size| size >= needed)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| SolveError::SolveFailed(format!("no directory frees {needed}").into()))
    }
}
