//! Rectangular byte grid shared by the grid puzzles

use aoc_day::ParseError;

/// The four orthogonal steps, clockwise from north
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// All eight neighbouring steps
pub const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Parse non-empty lines into a grid; every line must have the same width
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.lines().map(str::trim_end).filter(|line| !line.is_empty()).peekable();
        let cols = lines
            .peek()
            .map(|line| line.len())
            .ok_or_else(|| ParseError::MissingData("empty grid".into()))?;

        let mut cells = Vec::new();
        let mut rows = 0;
        for line in lines {
            if line.len() != cols {
                return Err(ParseError::InvalidFormat(format!(
                    "row {} has width {}, expected {cols}",
                    rows + 1,
                    line.len()
                )));
            }
            cells.extend_from_slice(line.as_bytes());
            rows += 1;
        }
        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.cols as isize).contains(&col)
    }

    /// Cell at a signed position, `None` outside the grid
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        self.contains(row, col)
            .then(|| self.cells[row as usize * self.cols + col as usize])
    }

    /// Overwrite a cell, returning its previous value
    pub fn replace(&mut self, row: usize, col: usize, value: u8) -> u8 {
        std::mem::replace(&mut self.cells[row * self.cols + col], value)
    }

    /// Every `(row, col, cell)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// First position holding `value`
    pub fn find(&self, value: u8) -> Option<(usize, usize)> {
        self.cells().find(|&(_, _, cell)| cell == value).map(|(r, c, _)| (r, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let grid = Grid::parse("ab\ncd\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.get(1, 0), Some(b'c'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.find(b'd'), Some((1, 1)));
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut grid = Grid::parse("ab\ncd").unwrap();
        assert_eq!(grid.replace(0, 1, b'#'), b'b');
        assert_eq!(grid.get(0, 1), Some(b'#'));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(Grid::parse("abc\nde"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Grid::parse("\n\n"), Err(ParseError::MissingData(_))));
    }
}
