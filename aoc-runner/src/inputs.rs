//! Puzzle input loading

use crate::error::{InputError, RunError};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// File-based store of real puzzle inputs
///
/// Directory structure: `{dir}/{year}/day_{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(year.to_string()).join(format!("day_{:02}.txt", day))
    }

    /// Read the input file for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let content = fs::read_to_string(self.input_path(year, day))?;
        if content.trim().is_empty() {
            return Err(InputError::Empty);
        }
        Ok(content)
    }

    /// Input for a year/day; an input bundled with the Day Module wins over the file
    pub fn load(&self, year: u16, day: u8, bundled: Option<&'static str>) -> Result<Cow<'static, str>, RunError> {
        if let Some(input) = bundled {
            log::debug!("using bundled input for {year} day {day:02}");
            return Ok(Cow::Borrowed(input));
        }
        self.read(year, day)
            .map(Cow::Owned)
            .map_err(|source| RunError::InputUnavailable {
                year,
                day,
                path: self.input_path(year, day),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(temp: &TempDir, year: u16, day: u8, content: &str) {
        let dir = temp.path().join(year.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("day_{day:02}.txt")), content).unwrap();
    }

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(store.input_path(2024, 1), PathBuf::from("inputs/2024/day_01.txt"));
        assert_eq!(store.input_path(2015, 25), PathBuf::from("inputs/2015/day_25.txt"));
    }

    #[test]
    fn test_read_existing_file() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(matches!(store.read(2022, 3), Err(InputError::Io(_))));
        write_input(&temp, 2022, 3, "abc\n");
        assert_eq!(store.read(2022, 3).unwrap(), "abc\n");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        match store.load(2024, 6, None) {
            Err(RunError::InputUnavailable { year, day, path, source }) => {
                assert_eq!((year, day), (2024, 6));
                assert_eq!(path, store.input_path(2024, 6));
                assert!(matches!(source, InputError::Io(_)));
            }
            other => panic!("expected InputUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_rejected() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        write_input(&temp, 2024, 1, "  \n");

        assert!(matches!(store.read(2024, 1), Err(InputError::Empty)));
    }

    #[test]
    fn test_bundled_input_wins() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        write_input(&temp, 2015, 4, "from-file");

        let input = store.load(2015, 4, Some("bundled")).unwrap();
        assert!(matches!(input, Cow::Borrowed("bundled")));

        let input = store.load(2015, 4, None).unwrap();
        assert_eq!(input, "from-file");
    }
}
