//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Daily puzzle runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run registered Day Modules and time them", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day_{dd}.txt` puzzle inputs
    /// [default: $AOC_INPUT_DIR, then ./inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Check every bundled example instead of running the real inputs
    #[arg(long)]
    pub examples: bool,

    /// Stop after the first day that records a failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!((args.year, args.day, args.part), (None, None, None));
        assert!(args.tags.is_empty());
        assert!(!args.examples && !args.fail_fast && !args.quiet);
    }

    #[test]
    fn test_selector_and_tags() {
        let args = Args::try_parse_from(["aoc", "-y", "2024", "-d", "6", "-p", "2", "--tags", "grid,simulation"]).unwrap();
        assert_eq!((args.year, args.day, args.part), (Some(2024), Some(6), Some(2)));
        assert_eq!(args.tags, vec!["grid", "simulation"]);
    }

    #[test]
    fn test_out_of_range_day_and_part_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
